use crate::infra::{default_match_policy, parse_occasion, parse_season, InMemoryClosetRepository};
use chrono::{Duration, Utc};
use clap::Args;
use std::sync::Arc;
use wardrobe::closet::{
    calculate_closet_analytics, cost_per_wear, ClosetItem, ClothingCategory, ItemId, NewClosetItem,
    Occasion, OutfitConfig, Pattern, Season, WardrobeService,
};
use wardrobe::error::AppError;

const DEMO_OWNER: &str = "demo-user";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Occasion to match outfits for (e.g. casual, work, party). Defaults to casual.
    #[arg(long, value_parser = parse_occasion)]
    pub(crate) occasion: Option<Occasion>,
    /// Restrict suggestions to a season (spring, summer, fall, winter)
    #[arg(long, value_parser = parse_season)]
    pub(crate) season: Option<Season>,
    /// Skip the closet analytics portion of the demo output
    #[arg(long)]
    pub(crate) skip_analytics: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClosetReportArgs {
    /// List each item's amortized cost per wear in the output
    #[arg(long)]
    pub(crate) list_costs: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        occasion,
        season,
        skip_analytics,
    } = args;
    let occasion = occasion.unwrap_or(Occasion::Casual);

    println!("Wardrobe matching demo");
    println!("Occasion: {}", occasion.label());
    match season {
        Some(season) => println!("Season filter: {}", season.label()),
        None => println!("Season filter: none"),
    }

    let template = OutfitConfig::for_occasion(occasion);
    let required: Vec<_> = template.required.iter().map(|slot| slot.label()).collect();
    let optional: Vec<_> = template.optional.iter().map(|slot| slot.label()).collect();
    println!("Dress code for {}: requires {}", occasion.label(), required.join(", "));
    if optional.is_empty() {
        println!("Optional slots: none");
    } else {
        println!("Optional slots: {}", optional.join(", "));
    }

    let repository = Arc::new(InMemoryClosetRepository::default());
    let service = WardrobeService::new(repository, default_match_policy());
    seed_demo_closet(&service)?;

    let items = service.items(DEMO_OWNER)?;
    println!("\nSeeded closet ({} items)", items.len());
    for item in &items {
        println!(
            "- {} | {} | colors {} | seasons {}",
            item.id.0,
            item.category.label(),
            item.colors.join("/"),
            item.seasons
                .iter()
                .map(|season| season.label())
                .collect::<Vec<_>>()
                .join("/")
        );
    }

    let matches = service.suggest_outfits(DEMO_OWNER, occasion, season)?;
    if matches.is_empty() {
        println!("\nNo outfit cleared the confidence threshold");
    } else {
        println!("\nTop outfit suggestions");
        for (rank, outfit_match) in matches.iter().enumerate() {
            let pieces: Vec<_> = outfit_match
                .outfit
                .iter()
                .map(|item| item.category.label())
                .collect();
            println!(
                "{}. {} (confidence {:.2})",
                rank + 1,
                pieces.join(" + "),
                outfit_match.confidence
            );
            println!(
                "   scores: color {:.2} | trend {:.2} | occasion {:.2}",
                outfit_match.scores.color,
                outfit_match.scores.trend,
                outfit_match.scores.occasion
            );
            if let Some(explanation) = &outfit_match.explanation {
                println!("   {}", explanation);
            }
        }
    }

    if skip_analytics {
        return Ok(());
    }

    let analytics = service.analytics(DEMO_OWNER, Utc::now())?;
    println!("\nCloset analytics");
    println!("- Total items: {}", analytics.total_items);
    println!(
        "- Most used category: {} | least used: {}",
        analytics.most_used_category.label(),
        analytics.least_used_category.label()
    );
    println!(
        "- Underused items: {} | average wears: {}",
        analytics.underused_items, analytics.average_wear_count
    );
    println!("- Sustainability score: {}/100", analytics.sustainability_score);

    Ok(())
}

pub(crate) fn run_closet_report(args: ClosetReportArgs) -> Result<(), AppError> {
    let ClosetReportArgs { list_costs } = args;

    let now = Utc::now();
    let closet = sample_report_closet();
    let analytics = calculate_closet_analytics(&closet, now);

    println!("Closet analytics report");
    println!("- Total items: {}", analytics.total_items);
    println!(
        "- Most used category: {} | least used: {}",
        analytics.most_used_category.label(),
        analytics.least_used_category.label()
    );
    println!(
        "- Underused items: {} (not worn in the last 30 days)",
        analytics.underused_items
    );
    println!("- Average wears per item: {}", analytics.average_wear_count);

    println!("\nColor distribution");
    for (color, count) in &analytics.color_distribution {
        println!("- {color}: {count}");
    }

    println!("\nSeason coverage");
    for season in [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::AllSeason,
    ] {
        println!(
            "- {}: {}",
            season.label(),
            analytics.season_distribution.count(season)
        );
    }

    println!(
        "\nSustainability score: {}/100",
        analytics.sustainability_score
    );

    if list_costs {
        println!("\nCost per wear");
        for item in &closet {
            println!(
                "- {} ({}): ${:.2}",
                item.id.0,
                item.category.label(),
                cost_per_wear(item)
            );
        }
    }

    Ok(())
}

fn seed_demo_closet(
    service: &WardrobeService<InMemoryClosetRepository>,
) -> Result<(), AppError> {
    let seeds = [
        (ClothingCategory::Shirt, vec!["white"], vec![Season::AllSeason], Some(45.0)),
        (ClothingCategory::TShirt, vec!["beige"], vec![Season::Summer, Season::Spring], Some(20.0)),
        (ClothingCategory::Sweater, vec!["brown"], vec![Season::Fall, Season::Winter], Some(60.0)),
        (ClothingCategory::Jeans, vec!["blue"], vec![Season::AllSeason], Some(75.0)),
        (ClothingCategory::Pants, vec!["black"], vec![Season::AllSeason], Some(55.0)),
        (ClothingCategory::Dress, vec!["black"], vec![Season::AllSeason], Some(90.0)),
        (ClothingCategory::Sneakers, vec!["white"], vec![Season::AllSeason], Some(85.0)),
        (ClothingCategory::Boots, vec!["brown"], vec![Season::Fall, Season::Winter], Some(120.0)),
        (ClothingCategory::Jacket, vec!["olive"], vec![Season::Fall, Season::Spring], Some(110.0)),
    ];

    let worn_recently = Utc::now() - Duration::days(3);
    for (index, (category, colors, seasons, price)) in seeds.into_iter().enumerate() {
        let stored = service.add_item(
            DEMO_OWNER,
            NewClosetItem {
                category,
                colors: colors.into_iter().map(str::to_string).collect(),
                pattern: Pattern::Solid,
                fabric: None,
                seasons,
                confidence: 0.9,
                price,
                tags: Vec::new(),
            },
        )?;
        // wear the first few items so the analytics have texture
        for _ in 0..(3usize.saturating_sub(index)) {
            service.log_wear(&stored.id, worn_recently)?;
        }
    }

    Ok(())
}

fn sample_report_closet() -> Vec<ClosetItem> {
    let now = Utc::now();
    let entries = [
        ("jeans-1", ClothingCategory::Jeans, "blue", 24, Some(75.0), Some(now - Duration::days(2))),
        ("shirt-1", ClothingCategory::Shirt, "white", 18, Some(45.0), Some(now - Duration::days(6))),
        ("tee-1", ClothingCategory::TShirt, "beige", 30, Some(20.0), Some(now - Duration::days(1))),
        ("dress-1", ClothingCategory::Dress, "black", 5, Some(90.0), Some(now - Duration::days(40))),
        ("coat-1", ClothingCategory::Coat, "navy", 2, Some(180.0), Some(now - Duration::days(90))),
        ("boots-1", ClothingCategory::Boots, "brown", 12, Some(120.0), Some(now - Duration::days(12))),
        ("bag-1", ClothingCategory::Bag, "tan", 0, Some(65.0), None),
    ];

    entries
        .into_iter()
        .map(|(id, category, color, wear_count, price, last_worn)| {
            let seasons = match category {
                ClothingCategory::Coat | ClothingCategory::Boots => {
                    vec![Season::Fall, Season::Winter]
                }
                _ => vec![Season::AllSeason],
            };
            ClosetItem {
                id: ItemId(id.to_string()),
                owner_id: DEMO_OWNER.to_string(),
                category,
                colors: vec![color.to_string()],
                pattern: Pattern::Solid,
                fabric: None,
                seasons,
                confidence: 0.9,
                wear_count,
                price,
                last_worn,
                tags: Vec::new(),
            }
        })
        .collect()
}
