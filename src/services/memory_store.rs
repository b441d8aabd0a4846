use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::WatchlistItem;

use super::watchlist_store::{StoreResult, WatchlistStore};

#[derive(Default)]
struct Inner {
    items: BTreeMap<i64, WatchlistItem>,
    // highest id ever handed out or written; ids are never reused
    last_id: i64,
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryWatchlistStore {
    inner: RwLock<Inner>,
}

impl MemoryWatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WatchlistStore for MemoryWatchlistStore {
    async fn save(&self, mut item: WatchlistItem) -> StoreResult<WatchlistItem> {
        let mut inner = self.inner.write().await;

        let id = match item.id {
            Some(id) => {
                inner.last_id = inner.last_id.max(id);
                id
            }
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };

        item.id = Some(id);
        inner.items.insert(id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<WatchlistItem>> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> StoreResult<Vec<WatchlistItem>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn exists_by_coin_id_and_user_id(&self, coin_id: &str, user_id: &str) -> StoreResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .values()
            .any(|i| i.coin_id == coin_id && i.user_id == user_id))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.inner.write().await.items.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
