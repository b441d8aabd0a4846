use crate::{
    models::{WatchlistItem, WatchlistUpdate},
    AppState,
};

use super::watchlist_store::StoreResult;

/// Saves `item` as a new entry. A client-supplied id is discarded and no
/// duplicate (coin, user) check is made.
pub async fn create_item(state: &AppState, mut item: WatchlistItem) -> StoreResult<WatchlistItem> {
    item.id = None;
    let saved = state.store.save(item).await?;
    tracing::debug!(id = ?saved.id, coin = %saved.coin_id, user = %saved.user_id, "watchlist item created");
    Ok(saved)
}

pub async fn list_user_items(state: &AppState, user_id: &str) -> StoreResult<Vec<WatchlistItem>> {
    state.store.find_by_user_id(user_id).await
}

/// Returns `Ok(None)` when no item has this id.
pub async fn update_item(
    state: &AppState,
    id: i64,
    update: WatchlistUpdate,
) -> StoreResult<Option<WatchlistItem>> {
    let Some(mut item) = state.store.find_by_id(id).await? else {
        return Ok(None);
    };

    // coin_id / user_id / id stay as stored
    item.apply_update(update);

    let saved = state.store.save(item).await?;
    Ok(Some(saved))
}

pub async fn delete_item(state: &AppState, id: i64) -> StoreResult<()> {
    state.store.delete_by_id(id).await
}

pub async fn is_watched(state: &AppState, user_id: &str, coin_id: &str) -> StoreResult<bool> {
    state.store.exists_by_coin_id_and_user_id(coin_id, user_id).await
}
