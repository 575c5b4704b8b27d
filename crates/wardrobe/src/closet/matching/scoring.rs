use super::palette;
use super::policy::MatchPolicy;
use crate::closet::domain::{ClosetItem, ClothingCategory, Occasion, OutfitScores};

/// Score one candidate outfit for one occasion.
///
/// Callers must not pass an empty outfit; the generator never emits one, and
/// the trend/occasion fractions are undefined over zero items.
pub(crate) fn score_outfit(items: &[&ClosetItem], occasion: Occasion) -> OutfitScores {
    OutfitScores {
        color: color_score(items),
        trend: trend_score(items),
        occasion: occasion_score(items, occasion),
    }
}

pub(crate) fn confidence(scores: &OutfitScores, policy: &MatchPolicy) -> f32 {
    scores.color * policy.color_weight
        + scores.trend * policy.trend_weight
        + scores.occasion * policy.occasion_weight
}

/// Mean pairwise color compatibility: 1.0 for a compatible pair, 0.3 for an
/// incompatible one. Outfits with fewer than two items are trivially 1.0.
fn color_score(items: &[&ClosetItem]) -> f32 {
    if items.len() < 2 {
        return 1.0;
    }

    let mut total = 0.0_f32;
    let mut comparisons = 0_u32;

    for (index, first) in items.iter().enumerate() {
        for second in &items[index + 1..] {
            let pair_compatible = first.colors.iter().any(|ours| {
                second
                    .colors
                    .iter()
                    .any(|theirs| palette::color_compatible(ours, theirs))
            });
            total += if pair_compatible { 1.0 } else { 0.3 };
            comparisons += 1;
        }
    }

    total / comparisons as f32
}

/// Fraction of items carrying at least one trending color.
fn trend_score(items: &[&ClosetItem]) -> f32 {
    let trendy = items
        .iter()
        .filter(|item| item.colors.iter().any(|color| palette::is_trending(color)))
        .count();

    trendy as f32 / items.len() as f32
}

/// Fraction of items in the occasion's category set, or the fixed default
/// for occasions without one.
fn occasion_score(items: &[&ClosetItem], occasion: Occasion) -> f32 {
    match occasion {
        Occasion::Formal | Occasion::Work => {
            category_fraction(items, ClothingCategory::counts_as_formal)
        }
        Occasion::Casual | Occasion::Gym => {
            category_fraction(items, ClothingCategory::counts_as_casual)
        }
        _ => 0.7,
    }
}

fn category_fraction(items: &[&ClosetItem], included: impl Fn(ClothingCategory) -> bool) -> f32 {
    let matching = items.iter().filter(|item| included(item.category)).count();
    matching as f32 / items.len() as f32
}
