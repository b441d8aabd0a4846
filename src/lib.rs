//! Library entrypoint for the crypto watchlist service.
//!
//! Integration tests under `tests/` build the router from here with an
//! in-memory store, so they run without MongoDB.

use std::sync::Arc;

pub mod config;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn services::WatchlistStore>,
    pub settings: config::Settings,
}
