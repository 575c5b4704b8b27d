//! Wardrobe-wide statistics: usage ranking, distributions, and the
//! sustainability heuristic. Shares the domain model with the matching
//! engine but no state.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::closet::domain::{ClosetAnalytics, ClosetItem, ClothingCategory, SeasonDistribution};

const UNDERUSED_AFTER_DAYS: i64 = 30;
const LOW_WEAR_THRESHOLD: u32 = 2;
/// Placeholder ranking category for an empty wardrobe.
const FALLBACK_CATEGORY: ClothingCategory = ClothingCategory::TShirt;

/// Compute aggregate statistics over the full item list.
///
/// Every statistic has a defined zero/default value for an empty inventory;
/// this never fails. `now` anchors the underused-item window so reports are
/// reproducible.
pub fn calculate_closet_analytics(items: &[ClosetItem], now: DateTime<Utc>) -> ClosetAnalytics {
    if items.is_empty() {
        return ClosetAnalytics {
            total_items: 0,
            most_used_category: FALLBACK_CATEGORY,
            least_used_category: FALLBACK_CATEGORY,
            underused_items: 0,
            average_wear_count: 0,
            color_distribution: BTreeMap::new(),
            season_distribution: SeasonDistribution::default(),
            sustainability_score: 0,
        };
    }

    // First-encounter order plus a stable sort pins the tie-break for the
    // usage ranking.
    let mut category_wear: Vec<(ClothingCategory, u32)> = Vec::new();
    for item in items {
        match category_wear
            .iter_mut()
            .find(|(category, _)| *category == item.category)
        {
            Some((_, total)) => *total += item.wear_count,
            None => category_wear.push((item.category, item.wear_count)),
        }
    }
    category_wear.sort_by(|a, b| b.1.cmp(&a.1));

    let most_used_category = category_wear
        .first()
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY);
    let least_used_category = category_wear
        .last()
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY);

    let cutoff = now - Duration::days(UNDERUSED_AFTER_DAYS);
    let underused_items = items
        .iter()
        .filter(|item| item.last_worn.map(|worn| worn < cutoff).unwrap_or(true))
        .count();

    let total_wears: u32 = items.iter().map(|item| item.wear_count).sum();
    let average_wear_count = (total_wears as f32 / items.len() as f32).round() as u32;

    let mut color_distribution: BTreeMap<String, u32> = BTreeMap::new();
    for item in items {
        for color in &item.colors {
            *color_distribution.entry(color.clone()).or_insert(0) += 1;
        }
    }

    let mut season_distribution = SeasonDistribution::default();
    for item in items {
        for season in &item.seasons {
            season_distribution.record(*season);
        }
    }

    ClosetAnalytics {
        total_items: items.len(),
        most_used_category,
        least_used_category,
        underused_items,
        average_wear_count,
        color_distribution,
        season_distribution,
        sustainability_score: calculate_sustainability_score(items),
    }
}

/// 0-100 heuristic for how efficiently the wardrobe is used: 40% wear rate,
/// 30% utilization (share of items worn at least twice), 30% cost per wear.
/// Items without price data fall back to a flat cost factor of 70.
pub fn calculate_sustainability_score(items: &[ClosetItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let item_count = items.len() as f32;
    let total_wears: u32 = items.iter().map(|item| item.wear_count).sum();
    let usage_score = ((total_wears as f32 / item_count / 10.0) * 100.0).min(100.0);

    let low_wear = items
        .iter()
        .filter(|item| item.wear_count < LOW_WEAR_THRESHOLD)
        .count() as f32;
    let utilization_score = (item_count - low_wear) / item_count * 100.0;

    let priced: Vec<&ClosetItem> = items
        .iter()
        .filter(|item| item.price.is_some() && item.wear_count > 0)
        .collect();
    let cost_score = if priced.is_empty() {
        70.0
    } else {
        let average_cost_per_wear =
            priced.iter().map(|item| cost_per_wear(item)).sum::<f32>() / priced.len() as f32;
        (100.0 - average_cost_per_wear * 2.0).max(0.0)
    };

    let score = usage_score * 0.4 + utilization_score * 0.3 + cost_score * 0.3;
    score.min(100.0).round() as u8
}

/// Price spread over recorded wears: the full price while unworn, zero when
/// the item has no price at all.
pub fn cost_per_wear(item: &ClosetItem) -> f32 {
    match item.price {
        None => 0.0,
        Some(price) if item.wear_count == 0 => price,
        Some(price) => price / item.wear_count as f32,
    }
}
