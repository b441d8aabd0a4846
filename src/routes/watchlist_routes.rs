use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::watchlist_controller};

// `:key` is the user id on GET and the item id on PUT/DELETE; the router
// needs one parameter name per segment.
pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/watchlist", post(watchlist_controller::post_create_item))
        .route(
            "/api/watchlist/:key",
            get(watchlist_controller::get_user_items)
                .put(watchlist_controller::put_update_item)
                .delete(watchlist_controller::delete_item),
        )
        .route(
            "/api/watchlist/:key/coins/:coin_id",
            get(watchlist_controller::get_contains_coin),
        )
}
