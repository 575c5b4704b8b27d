use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::closet::domain::{ClosetItem, ClothingCategory, ItemId, Pattern, Season};
use crate::closet::matching::MatchPolicy;
use crate::closet::repository::{ClosetRepository, RepositoryError};
use crate::closet::service::WardrobeService;

pub(super) const OWNER: &str = "user-demo";

pub(super) fn item(id: &str, category: ClothingCategory, colors: &[&str]) -> ClosetItem {
    ClosetItem {
        id: ItemId(id.to_string()),
        owner_id: OWNER.to_string(),
        category,
        colors: colors.iter().map(|color| color.to_string()).collect(),
        pattern: Pattern::Solid,
        fabric: None,
        seasons: vec![Season::AllSeason],
        confidence: 0.9,
        wear_count: 0,
        price: None,
        last_worn: None,
        tags: Vec::new(),
    }
}

pub(super) fn seasonal_item(
    id: &str,
    category: ClothingCategory,
    colors: &[&str],
    seasons: &[Season],
) -> ClosetItem {
    let mut item = item(id, category, colors);
    item.seasons = seasons.to_vec();
    item
}

pub(super) fn worn_item(
    id: &str,
    category: ClothingCategory,
    wear_count: u32,
    price: Option<f32>,
    last_worn: Option<DateTime<Utc>>,
) -> ClosetItem {
    let mut item = item(id, category, &["black"]);
    item.wear_count = wear_count;
    item.price = price;
    item.last_worn = last_worn;
    item
}

/// A wardrobe large enough to exhaust the combination cap: five tops, three
/// bottoms, three footwear, one jacket, five dresses.
pub(super) fn oversized_wardrobe() -> Vec<ClosetItem> {
    let mut items = Vec::new();
    for index in 0..5 {
        items.push(item(
            &format!("top-{index}"),
            ClothingCategory::Shirt,
            &["white"],
        ));
        items.push(item(
            &format!("dress-{index}"),
            ClothingCategory::Dress,
            &["black"],
        ));
    }
    for index in 0..3 {
        items.push(item(
            &format!("bottom-{index}"),
            ClothingCategory::Pants,
            &["navy"],
        ));
        items.push(item(
            &format!("shoes-{index}"),
            ClothingCategory::Shoes,
            &["black"],
        ));
    }
    items.push(item("jacket-0", ClothingCategory::Jacket, &["grey"]));
    items
}

#[derive(Default, Clone)]
pub(super) struct MemoryClosetRepository {
    pub(super) items: Arc<Mutex<Vec<ClosetItem>>>,
}

impl ClosetRepository for MemoryClosetRepository {
    fn insert(&self, item: ClosetItem) -> Result<ClosetItem, RepositoryError> {
        let mut guard = self.items.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == item.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(item.clone());
        Ok(item)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<ClosetItem>, RepositoryError> {
        let guard = self.items.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &ItemId) -> Result<Option<ClosetItem>, RepositoryError> {
        let guard = self.items.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|item| item.id == *id).cloned())
    }

    fn record_wear(
        &self,
        id: &ItemId,
        worn_at: DateTime<Utc>,
    ) -> Result<ClosetItem, RepositoryError> {
        let mut guard = self.items.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.wear_count += 1;
                item.last_worn = Some(worn_at);
                Ok(item.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(super) struct UnavailableRepository;

impl ClosetRepository for UnavailableRepository {
    fn insert(&self, _item: ClosetItem) -> Result<ClosetItem, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self, _owner_id: &str) -> Result<Vec<ClosetItem>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ItemId) -> Result<Option<ClosetItem>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn record_wear(
        &self,
        _id: &ItemId,
        _worn_at: DateTime<Utc>,
    ) -> Result<ClosetItem, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    WardrobeService<MemoryClosetRepository>,
    Arc<MemoryClosetRepository>,
) {
    let repository = Arc::new(MemoryClosetRepository::default());
    let service = WardrobeService::new(repository.clone(), MatchPolicy::standard());
    (service, repository)
}

pub(super) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
