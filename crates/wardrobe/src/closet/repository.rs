use chrono::{DateTime, Utc};

use crate::closet::domain::{ClosetItem, ItemId};

/// Storage abstraction so the service can be exercised without the hosted
/// document store. Implementations must keep per-owner listing in insertion
/// order: the combination generator's output order (and therefore tie-breaks
/// in the ranked results) depends on it.
pub trait ClosetRepository: Send + Sync {
    fn insert(&self, item: ClosetItem) -> Result<ClosetItem, RepositoryError>;
    fn list(&self, owner_id: &str) -> Result<Vec<ClosetItem>, RepositoryError>;
    fn fetch(&self, id: &ItemId) -> Result<Option<ClosetItem>, RepositoryError>;
    /// External wear-logging path: bump the wear count and stamp the item as
    /// last worn at `worn_at`. The matching core itself never mutates items.
    fn record_wear(&self, id: &ItemId, worn_at: DateTime<Utc>) -> Result<ClosetItem, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("item already exists")]
    Conflict,
    #[error("item not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
