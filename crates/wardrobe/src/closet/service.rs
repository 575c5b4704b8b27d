use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analytics::{calculate_closet_analytics, calculate_sustainability_score};
use super::domain::{
    ClosetAnalytics, ClosetItem, ClothingCategory, ItemId, Occasion, OutfitMatch, Pattern, Season,
};
use super::explanation::placeholder_explanation;
use super::matching::{MatchEngine, MatchPolicy};
use super::repository::{ClosetRepository, RepositoryError};

/// Attribute payload for a new item, as produced by the upload-and-analysis
/// cycle (the vision step is an external collaborator; this is its output
/// record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClosetItem {
    pub category: ClothingCategory,
    pub colors: Vec<String>,
    pub pattern: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    pub seasons: Vec<Season>,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Service composing the storage seam with the matching engine and analytics.
pub struct WardrobeService<R> {
    repository: Arc<R>,
    engine: MatchEngine,
}

static ITEM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_item_id() -> ItemId {
    let id = ITEM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ItemId(format!("item-{id:06}"))
}

impl<R> WardrobeService<R>
where
    R: ClosetRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: MatchPolicy) -> Self {
        Self {
            repository,
            engine: MatchEngine::new(policy),
        }
    }

    /// Register a freshly analyzed item, returning the stored record.
    pub fn add_item(
        &self,
        owner_id: &str,
        attributes: NewClosetItem,
    ) -> Result<ClosetItem, WardrobeServiceError> {
        let item = ClosetItem {
            id: next_item_id(),
            owner_id: owner_id.to_string(),
            category: attributes.category,
            colors: attributes.colors,
            pattern: attributes.pattern,
            fabric: attributes.fabric,
            seasons: attributes.seasons,
            confidence: attributes.confidence.clamp(0.0, 1.0),
            wear_count: 0,
            price: attributes.price,
            last_worn: None,
            tags: attributes.tags,
        };

        Ok(self.repository.insert(item)?)
    }

    pub fn items(&self, owner_id: &str) -> Result<Vec<ClosetItem>, WardrobeServiceError> {
        Ok(self.repository.list(owner_id)?)
    }

    /// Record one wear of an item; returns the updated record.
    pub fn log_wear(
        &self,
        id: &ItemId,
        worn_at: DateTime<Utc>,
    ) -> Result<ClosetItem, WardrobeServiceError> {
        Ok(self.repository.record_wear(id, worn_at)?)
    }

    /// Run the matching engine over the owner's closet and fill the deferred
    /// explanation field with placeholder text.
    pub fn suggest_outfits(
        &self,
        owner_id: &str,
        occasion: Occasion,
        season: Option<Season>,
    ) -> Result<Vec<OutfitMatch>, WardrobeServiceError> {
        let items = self.repository.list(owner_id)?;
        let mut matches = self.engine.generate_matches(&items, occasion, season);
        for outfit_match in &mut matches {
            outfit_match.explanation = Some(placeholder_explanation(&outfit_match.outfit));
        }
        Ok(matches)
    }

    pub fn analytics(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ClosetAnalytics, WardrobeServiceError> {
        let items = self.repository.list(owner_id)?;
        Ok(calculate_closet_analytics(&items, now))
    }

    pub fn sustainability_score(&self, owner_id: &str) -> Result<u8, WardrobeServiceError> {
        let items = self.repository.list(owner_id)?;
        Ok(calculate_sustainability_score(&items))
    }
}

/// Error raised by the wardrobe service.
#[derive(Debug, thiserror::Error)]
pub enum WardrobeServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
