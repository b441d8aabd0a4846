use serde::{Deserialize, Serialize};

/// A single tracked coin on a user's watchlist.
///
/// `id` is `None` until the store assigns one. `user_id` is an opaque
/// scoping key; nothing checks it against a user registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    #[serde(default)]
    pub id: Option<i64>,

    pub coin_id: String,
    pub user_id: String,

    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `PUT /api/watchlist/:id`. Only these two fields are mutable;
/// anything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistUpdate {
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WatchlistItem {
    pub fn new(coin_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: None,
            coin_id: coin_id.into(),
            user_id: user_id.into(),
            target_price: None,
            notes: None,
        }
    }

    pub fn apply_update(&mut self, update: WatchlistUpdate) {
        self.target_price = update.target_price;
        self.notes = update.notes;
    }
}
