use std::net::SocketAddr;
use std::sync::Arc;

use mongodb::Client;

use crypto_watchlist::{
    config::{self, StorageBackend},
    routes,
    services::{db_init, MemoryWatchlistStore, MongoWatchlistStore, WatchlistStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let store: Arc<dyn WatchlistStore> = match settings.storage {
        StorageBackend::Mongo => {
            let client = Client::with_uri_str(&settings.mongodb_uri).await?;
            let db = client.database(&settings.mongodb_db);
            db_init::ensure_indexes(&db).await?;
            Arc::new(MongoWatchlistStore::new(db))
        }
        StorageBackend::Memory => Arc::new(MemoryWatchlistStore::new()),
    };
    tracing::info!("using {} watchlist store", store.backend_name());

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>()?, settings.port));

    let state = AppState { store, settings };
    let app = routes::app(state);

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
