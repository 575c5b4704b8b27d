//! Wardrobe domain: the outfit-matching engine, closet analytics, and the
//! storage seam plus service facade the HTTP layer composes over.

pub mod analytics;
pub mod domain;
pub mod explanation;
pub mod matching;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::{calculate_closet_analytics, calculate_sustainability_score, cost_per_wear};
pub use domain::{
    ClosetAnalytics, ClosetItem, ClothingCategory, ItemId, Occasion, OutfitConfig, OutfitMatch,
    OutfitScores, Pattern, Season, SeasonDistribution, SlotGroup,
};
pub use matching::{color_compatible, generate_outfit_matches, MatchEngine, MatchPolicy};
pub use repository::{ClosetRepository, RepositoryError};
pub use router::closet_router;
pub use service::{NewClosetItem, WardrobeService, WardrobeServiceError};
