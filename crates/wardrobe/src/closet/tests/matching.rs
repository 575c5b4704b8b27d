use super::common::*;
use crate::closet::domain::{ClothingCategory, Occasion, Season};
use crate::closet::matching::combinations::{self, SlotBuckets};
use crate::closet::matching::{generate_outfit_matches, MatchEngine, MatchPolicy};

#[test]
fn empty_inventory_yields_no_matches() {
    let matches = generate_outfit_matches(&[], Occasion::Casual, None);
    assert!(matches.is_empty());
}

#[test]
fn generator_never_exceeds_the_combination_cap() {
    let wardrobe = oversized_wardrobe();
    let refs: Vec<_> = wardrobe.iter().collect();
    let buckets = SlotBuckets::partition(&refs);

    let candidates = combinations::generate(&buckets, &MatchPolicy::standard());

    assert_eq!(candidates.len(), 50);
}

#[test]
fn dress_outfits_come_before_separates() {
    let wardrobe = vec![
        item("shirt-1", ClothingCategory::Shirt, &["white"]),
        item("jeans-1", ClothingCategory::Jeans, &["blue"]),
        item("dress-1", ClothingCategory::Dress, &["black"]),
        item("shoes-1", ClothingCategory::Shoes, &["black"]),
    ];
    let refs: Vec<_> = wardrobe.iter().collect();
    let buckets = SlotBuckets::partition(&refs);

    let candidates = combinations::generate(&buckets, &MatchPolicy::standard());

    assert_eq!(candidates[0].len(), 2);
    assert_eq!(candidates[0][0].id.0, "dress-1");
    assert_eq!(candidates[0][1].id.0, "shoes-1");
    assert_eq!(candidates[1].len(), 3);
    assert_eq!(candidates[1][0].id.0, "shirt-1");
}

#[test]
fn outerwear_variant_is_emitted_after_each_base_outfit() {
    let wardrobe = vec![
        item("shirt-1", ClothingCategory::Shirt, &["white"]),
        item("jeans-1", ClothingCategory::Jeans, &["blue"]),
        item("shoes-1", ClothingCategory::Shoes, &["black"]),
        item("jacket-1", ClothingCategory::Jacket, &["grey"]),
        item("coat-1", ClothingCategory::Coat, &["navy"]),
    ];
    let refs: Vec<_> = wardrobe.iter().collect();
    let buckets = SlotBuckets::partition(&refs);

    let candidates = combinations::generate(&buckets, &MatchPolicy::standard());

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].len(), 4);
    // only the first outerwear item participates
    assert_eq!(candidates[1][3].id.0, "jacket-1");
}

#[test]
fn unrecognized_categories_are_dropped_from_bucketing() {
    let wardrobe = vec![
        item("mystery-1", ClothingCategory::Other, &["black"]),
        item("dress-1", ClothingCategory::Dress, &["black"]),
        item("shoes-1", ClothingCategory::Shoes, &["black"]),
    ];
    let refs: Vec<_> = wardrobe.iter().collect();
    let buckets = SlotBuckets::partition(&refs);

    assert!(buckets.tops.is_empty());
    assert!(buckets.accessories.is_empty());
    assert_eq!(buckets.dresses.len(), 1);

    let candidates = combinations::generate(&buckets, &MatchPolicy::standard());
    assert_eq!(candidates.len(), 1);
}

#[test]
fn season_filter_keeps_all_season_items() {
    let wardrobe = vec![
        seasonal_item(
            "dress-summer",
            ClothingCategory::Dress,
            &["white"],
            &[Season::Summer],
        ),
        seasonal_item(
            "dress-winter",
            ClothingCategory::Dress,
            &["black"],
            &[Season::Winter],
        ),
        seasonal_item(
            "shoes-any",
            ClothingCategory::Shoes,
            &["white"],
            &[Season::AllSeason],
        ),
    ];

    let matches = generate_outfit_matches(&wardrobe, Occasion::Party, Some(Season::Summer));

    assert_eq!(matches.len(), 1);
    let ids: Vec<_> = matches[0].outfit.iter().map(|item| item.id.0.as_str()).collect();
    assert_eq!(ids, ["dress-summer", "shoes-any"]);
}

#[test]
fn matches_are_capped_sorted_and_thresholded() {
    let wardrobe = oversized_wardrobe();

    let matches = generate_outfit_matches(&wardrobe, Occasion::Party, None);

    assert!(matches.len() <= 10);
    assert!(!matches.is_empty());
    for window in matches.windows(2) {
        assert!(window[0].confidence >= window[1].confidence);
    }
    for outfit_match in &matches {
        assert!(outfit_match.confidence > 0.5);
        assert!(outfit_match.confidence <= 1.0);
        assert!(outfit_match.explanation.is_none());
    }
}

#[test]
fn equal_confidence_ties_keep_generator_order() {
    // two identical dresses and one pair of shoes score identically
    let wardrobe = vec![
        item("dress-a", ClothingCategory::Dress, &["black"]),
        item("dress-b", ClothingCategory::Dress, &["black"]),
        item("shoes-1", ClothingCategory::Shoes, &["black"]),
    ];

    let matches = generate_outfit_matches(&wardrobe, Occasion::Party, None);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].outfit[0].id.0, "dress-a");
    assert_eq!(matches[1].outfit[0].id.0, "dress-b");
}

#[test]
fn identical_input_is_reproducible() {
    let wardrobe = oversized_wardrobe();
    let engine = MatchEngine::new(MatchPolicy::standard());

    let first = engine.generate_matches(&wardrobe, Occasion::Work, None);
    let second = engine.generate_matches(&wardrobe, Occasion::Work, None);

    assert_eq!(first, second);
}
