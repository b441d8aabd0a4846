use async_trait::async_trait;
use thiserror::Error;

use crate::models::WatchlistItem;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("id sequence {0:?} could not be advanced")]
    IdSequence(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for watchlist items.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Inserts under a fresh id when `item.id` is `None`, otherwise
    /// overwrites the whole record stored under that id (creating it if
    /// absent). An explicit id also retires every id up to it, so later
    /// fresh ids never collide with it.
    async fn save(&self, item: WatchlistItem) -> StoreResult<WatchlistItem>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<WatchlistItem>>;

    /// Ascending id order.
    async fn find_by_user_id(&self, user_id: &str) -> StoreResult<Vec<WatchlistItem>>;

    async fn exists_by_coin_id_and_user_id(&self, coin_id: &str, user_id: &str) -> StoreResult<bool>;

    /// Absent ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    async fn ping(&self) -> StoreResult<()>;

    fn backend_name(&self) -> &'static str;
}
