use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument, UpdateOptions},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::models::WatchlistItem;

use super::watchlist_store::{StoreError, StoreResult, WatchlistStore};

pub const ITEMS_COLLECTION: &str = "watchlist_items";
const COUNTERS_COLLECTION: &str = "counters";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WatchlistDoc {
    #[serde(rename = "_id")]
    id: i64,

    coin_id: String,
    user_id: String,

    target_price: Option<f64>,
    notes: Option<String>,
}

impl From<WatchlistDoc> for WatchlistItem {
    fn from(d: WatchlistDoc) -> Self {
        WatchlistItem {
            id: Some(d.id),
            coin_id: d.coin_id,
            user_id: d.user_id,
            target_price: d.target_price,
            notes: d.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

#[derive(Clone)]
pub struct MongoWatchlistStore {
    db: Database,
}

impl MongoWatchlistStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn items(&self) -> Collection<WatchlistDoc> {
        self.db.collection::<WatchlistDoc>(ITEMS_COLLECTION)
    }

    /// Atomically bumps the `counters` entry for the items collection.
    /// Sequence values are never handed out twice, so deleted ids stay retired.
    async fn next_id(&self) -> StoreResult<i64> {
        let counters = self.db.collection::<Counter>(COUNTERS_COLLECTION);

        let opts = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = counters
            .find_one_and_update(
                doc! { "_id": ITEMS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
                opts,
            )
            .await?;

        counter
            .map(|c| c.seq)
            .ok_or_else(|| StoreError::IdSequence(ITEMS_COLLECTION.to_string()))
    }

    /// Moves the sequence up to at least `id` so an explicitly written id is
    /// never handed out again by `next_id`.
    async fn raise_counter(&self, id: i64) -> StoreResult<()> {
        let counters = self.db.collection::<Counter>(COUNTERS_COLLECTION);

        let opts = UpdateOptions::builder().upsert(true).build();
        counters
            .update_one(
                doc! { "_id": ITEMS_COLLECTION },
                doc! { "$max": { "seq": id } },
                opts,
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl WatchlistStore for MongoWatchlistStore {
    async fn save(&self, item: WatchlistItem) -> StoreResult<WatchlistItem> {
        let explicit_id = item.id;
        let id = match explicit_id {
            Some(id) => id,
            None => self.next_id().await?,
        };

        let record = WatchlistDoc {
            id,
            coin_id: item.coin_id,
            user_id: item.user_id,
            target_price: item.target_price,
            notes: item.notes,
        };

        match explicit_id {
            // fresh id: a plain insert, so a collision surfaces as a duplicate key error
            None => {
                self.items().insert_one(&record, None).await?;
            }
            Some(id) => {
                self.raise_counter(id).await?;

                let opts = ReplaceOptions::builder().upsert(true).build();
                self.items()
                    .replace_one(doc! { "_id": id }, &record, opts)
                    .await?;
            }
        }

        Ok(record.into())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<WatchlistItem>> {
        let found = self.items().find_one(doc! { "_id": id }, None).await?;
        Ok(found.map(WatchlistItem::from))
    }

    async fn find_by_user_id(&self, user_id: &str) -> StoreResult<Vec<WatchlistItem>> {
        let find_opts = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let mut cursor = self
            .items()
            .find(doc! { "user_id": user_id }, find_opts)
            .await?;

        let mut items: Vec<WatchlistItem> = Vec::new();
        while let Some(res) = cursor.next().await {
            items.push(res?.into());
        }

        Ok(items)
    }

    async fn exists_by_coin_id_and_user_id(&self, coin_id: &str, user_id: &str) -> StoreResult<bool> {
        let n = self
            .items()
            .count_documents(doc! { "coin_id": coin_id, "user_id": user_id }, None)
            .await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.items().delete_one(doc! { "_id": id }, None).await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongo"
    }
}
