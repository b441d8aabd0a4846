pub mod db_init;
pub mod memory_store;
pub mod mongo_store;
pub mod watchlist_store;

pub mod watchlist_service;

pub use memory_store::MemoryWatchlistStore;
pub use mongo_store::MongoWatchlistStore;
pub use watchlist_store::{StoreError, StoreResult, WatchlistStore};
