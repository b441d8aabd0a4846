use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl StorageBackend {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Some(Self::Mongo),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,

    pub storage: StorageBackend,
    // None => permissive CORS
    pub cors_allowed_origin: Option<String>,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "crypto_tracker".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let storage = match env::var("STORAGE_BACKEND") {
        Ok(raw) => StorageBackend::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("unknown STORAGE_BACKEND {raw:?}, falling back to mongo");
            StorageBackend::Mongo
        }),
        Err(_) => StorageBackend::Mongo,
    };

    let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Settings {
        mongodb_uri,
        mongodb_db,
        host,
        port,
        storage,
        cors_allowed_origin,
    }
}

#[cfg(test)]
mod tests {
    use super::StorageBackend;

    #[test]
    fn storage_backend_parses_known_names() {
        assert_eq!(StorageBackend::parse("mongo"), Some(StorageBackend::Mongo));
        assert_eq!(StorageBackend::parse(" MongoDB "), Some(StorageBackend::Mongo));
        assert_eq!(StorageBackend::parse("memory"), Some(StorageBackend::Memory));
        assert_eq!(StorageBackend::parse("sqlite"), None);
    }
}
