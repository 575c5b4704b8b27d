use chrono::{Duration, TimeZone, Utc};

use super::common::*;
use crate::closet::analytics::{
    calculate_closet_analytics, calculate_sustainability_score, cost_per_wear,
};
use crate::closet::domain::{ClothingCategory, Season};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().expect("valid timestamp")
}

#[test]
fn empty_inventory_produces_zeroed_defaults() {
    let analytics = calculate_closet_analytics(&[], fixed_now());

    assert_eq!(analytics.total_items, 0);
    assert_eq!(analytics.most_used_category, ClothingCategory::TShirt);
    assert_eq!(analytics.least_used_category, ClothingCategory::TShirt);
    assert_eq!(analytics.underused_items, 0);
    assert_eq!(analytics.average_wear_count, 0);
    assert!(analytics.color_distribution.is_empty());
    assert_eq!(analytics.season_distribution.count(Season::Spring), 0);
    assert_eq!(analytics.sustainability_score, 0);
}

#[test]
fn category_ranking_orders_by_total_wear() {
    let now = fixed_now();
    let items = vec![
        worn_item("a", ClothingCategory::Jeans, 12, None, Some(now)),
        worn_item("b", ClothingCategory::Shirt, 2, None, Some(now)),
        worn_item("c", ClothingCategory::Jeans, 3, None, Some(now)),
        worn_item("d", ClothingCategory::Boots, 1, None, Some(now)),
    ];

    let analytics = calculate_closet_analytics(&items, now);

    assert_eq!(analytics.most_used_category, ClothingCategory::Jeans);
    assert_eq!(analytics.least_used_category, ClothingCategory::Boots);
}

#[test]
fn category_ranking_ties_break_by_first_encounter() {
    let now = fixed_now();
    let items = vec![
        worn_item("a", ClothingCategory::Hat, 5, None, Some(now)),
        worn_item("b", ClothingCategory::Bag, 5, None, Some(now)),
        worn_item("c", ClothingCategory::Skirt, 5, None, Some(now)),
    ];

    let analytics = calculate_closet_analytics(&items, now);

    // all tied: the first category encountered ranks highest, the last lowest
    assert_eq!(analytics.most_used_category, ClothingCategory::Hat);
    assert_eq!(analytics.least_used_category, ClothingCategory::Skirt);
}

#[test]
fn underused_counts_never_worn_and_stale_items() {
    let now = fixed_now();
    let items = vec![
        worn_item("fresh", ClothingCategory::Shirt, 4, None, Some(now - Duration::days(3))),
        worn_item("stale", ClothingCategory::Jeans, 4, None, Some(now - Duration::days(45))),
        worn_item("never", ClothingCategory::Boots, 0, None, None),
        worn_item(
            "boundary",
            ClothingCategory::Hat,
            1,
            None,
            Some(now - Duration::days(30)),
        ),
    ];

    let analytics = calculate_closet_analytics(&items, now);

    // exactly 30 days old is not yet past the cutoff
    assert_eq!(analytics.underused_items, 2);
}

#[test]
fn average_wear_count_rounds_to_nearest() {
    let now = fixed_now();
    let items = vec![
        worn_item("a", ClothingCategory::Shirt, 1, None, Some(now)),
        worn_item("b", ClothingCategory::Jeans, 2, None, Some(now)),
    ];

    let analytics = calculate_closet_analytics(&items, now);

    // mean 1.5 rounds up
    assert_eq!(analytics.average_wear_count, 2);
}

#[test]
fn color_and_season_distributions_count_occurrences() {
    let now = fixed_now();
    let mut first = item("a", ClothingCategory::Shirt, &["white", "blue"]);
    first.seasons = vec![Season::Summer, Season::Spring];
    let mut second = item("b", ClothingCategory::Jeans, &["blue"]);
    second.seasons = vec![Season::AllSeason];

    let analytics = calculate_closet_analytics(&[first, second], now);

    assert_eq!(analytics.color_distribution.get("blue"), Some(&2));
    assert_eq!(analytics.color_distribution.get("white"), Some(&1));
    assert_eq!(analytics.season_distribution.count(Season::Summer), 1);
    assert_eq!(analytics.season_distribution.count(Season::Spring), 1);
    assert_eq!(analytics.season_distribution.count(Season::AllSeason), 1);
    assert_eq!(analytics.season_distribution.count(Season::Winter), 0);
}

#[test]
fn unworn_unpriced_wardrobe_scores_the_cost_fallback() {
    let items: Vec<_> = (0..10)
        .map(|index| worn_item(&format!("i{index}"), ClothingCategory::Shirt, 0, None, None))
        .collect();

    // 0 * 0.4 + 0 * 0.3 + 70 * 0.3
    assert_eq!(calculate_sustainability_score(&items), 21);
}

#[test]
fn heavily_worn_affordable_wardrobe_scores_high() {
    let now = fixed_now();
    let items: Vec<_> = (0..4)
        .map(|index| {
            worn_item(
                &format!("i{index}"),
                ClothingCategory::Jeans,
                20,
                Some(40.0),
                Some(now),
            )
        })
        .collect();

    // usage 100 * 0.4 + utilization 100 * 0.3 + cost (100 - 2*2) * 0.3 = 98.8
    assert_eq!(calculate_sustainability_score(&items), 99);
}

#[test]
fn sustainability_score_never_exceeds_one_hundred() {
    let now = fixed_now();
    let items: Vec<_> = (0..3)
        .map(|index| {
            worn_item(
                &format!("i{index}"),
                ClothingCategory::Jeans,
                500,
                Some(1.0),
                Some(now),
            )
        })
        .collect();

    assert!(calculate_sustainability_score(&items) <= 100);
}

#[test]
fn cost_per_wear_covers_the_documented_cases() {
    let unworn = worn_item("a", ClothingCategory::Coat, 0, Some(100.0), None);
    let worn = worn_item("b", ClothingCategory::Coat, 4, Some(100.0), None);
    let unpriced = worn_item("c", ClothingCategory::Coat, 7, None, None);

    assert_close(cost_per_wear(&unworn), 100.0);
    assert_close(cost_per_wear(&worn), 25.0);
    assert_close(cost_per_wear(&unpriced), 0.0);
}
