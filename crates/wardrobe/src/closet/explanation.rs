//! Placeholder outfit explanations.
//!
//! Real narrative text comes from an external generation step after scoring;
//! these templates stand in so the field is never blank in demos and API
//! responses. Not part of the scoring contract.

use rand::seq::SliceRandom;

use crate::closet::domain::ClosetItem;

/// Build a template-based explanation from the outfit's categories and
/// deduplicated colors.
pub fn placeholder_explanation(outfit: &[ClosetItem]) -> String {
    let categories = outfit
        .iter()
        .map(|item| item.category.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut palette: Vec<&str> = Vec::new();
    for item in outfit {
        for color in &item.colors {
            if !palette.contains(&color.as_str()) {
                palette.push(color);
            }
        }
    }
    let colors = palette.join(", ");

    let templates = [
        format!(
            "This {categories} combination works beautifully with the {colors} color palette, \
             creating a harmonious and balanced look."
        ),
        format!(
            "The {colors} tones complement each other, following classic color theory for a \
             cohesive outfit."
        ),
        format!(
            "This outfit balances structure and comfort, with the {categories} creating visual \
             interest while staying wearable."
        ),
        format!(
            "The coordination between {colors} creates a look that reads both current and \
             timeless."
        ),
    ];

    templates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}
