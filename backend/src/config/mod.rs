use dotenv::dotenv;
use std::env;

/// Which storage backend the process runs against, chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Sqlite,
    MongoDb,
}

impl StorageKind {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            "mongodb" => Ok(Self::MongoDb),
            other => Err(format!(
                "unknown STORAGE_BACKEND '{}' (expected memory, sqlite or mongodb)",
                other
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage: StorageKind,
    pub port: u16,
    pub sqlite_path: String,
    pub mongodb_uri: Option<String>,
    pub production: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok(); // Load .env file if present
        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageKind::parse(&value)?,
            Err(_) => StorageKind::Memory,
        };
        Ok(Self {
            storage,
            port: match env::var("PORT") {
                Ok(value) => value.parse()?,
                Err(_) => 5000,
            },
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "data/residence-finder.db".to_string()),
            mongodb_uri: env::var("MONGODB_URI").ok(),
            production: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
        })
    }
}
