pub mod watchlist_item;

pub use watchlist_item::{WatchlistItem, WatchlistUpdate};
