use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    models::{WatchlistItem, WatchlistUpdate},
    services::{watchlist_service, StoreError},
    AppState,
};

fn internal_error(ctx: &str, e: StoreError) -> Response {
    tracing::error!("{ctx}: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}

// POST /api/watchlist
pub async fn post_create_item(
    State(state): State<AppState>,
    Json(item): Json<WatchlistItem>,
) -> Response {
    match watchlist_service::create_item(&state, item).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => internal_error("failed to create watchlist item", e),
    }
}

// GET /api/watchlist/:user_id
pub async fn get_user_items(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    match watchlist_service::list_user_items(&state, &user_id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => internal_error(&format!("failed to list watchlist for {user_id}"), e),
    }
}

// PUT /api/watchlist/:id
pub async fn put_update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<WatchlistUpdate>,
) -> Response {
    match watchlist_service::update_item(&state, id, update).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error(&format!("failed to update watchlist item {id}"), e),
    }
}

// DELETE /api/watchlist/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match watchlist_service::delete_item(&state, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error(&format!("failed to delete watchlist item {id}"), e),
    }
}

// GET /api/watchlist/:user_id/coins/:coin_id
pub async fn get_contains_coin(
    State(state): State<AppState>,
    Path((user_id, coin_id)): Path<(String, String)>,
) -> Response {
    match watchlist_service::is_watched(&state, &user_id, &coin_id).await {
        Ok(exists) => (StatusCode::OK, Json(json!({ "exists": exists }))).into_response(),
        Err(e) => internal_error(&format!("failed to check {coin_id} for {user_id}"), e),
    }
}
