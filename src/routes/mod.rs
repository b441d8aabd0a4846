use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod watchlist_routes;

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let Some(origin) = allowed_origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
        Err(_) => {
            tracing::warn!("invalid CORS_ALLOWED_ORIGIN {origin:?}, allowing any origin");
            CorsLayer::permissive()
        }
    }
}

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = watchlist_routes::add_routes(router);

    let cors = cors_layer(state.settings.cors_allowed_origin.as_deref());

    router
        .fallback(home_controller::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
