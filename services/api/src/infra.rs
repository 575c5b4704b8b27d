use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use wardrobe::closet::{
    ClosetItem, ClosetRepository, ItemId, MatchPolicy, Occasion, RepositoryError, Season,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the external document store. Insertion order is preserved
/// because suggestion ranking ties break on it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryClosetRepository {
    items: Arc<Mutex<Vec<ClosetItem>>>,
}

impl ClosetRepository for InMemoryClosetRepository {
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

pub(crate) fn default_match_policy() -> MatchPolicy {
    MatchPolicy::standard()
}

pub(crate) fn parse_occasion(raw: &str) -> Result<Occasion, String> {
    serde_json::from_value(Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("unknown occasion '{raw}'"))
}

pub(crate) fn parse_season(raw: &str) -> Result<Season, String> {
    serde_json::from_value(Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("unknown season '{raw}'"))
}
