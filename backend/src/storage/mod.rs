//! Storage abstraction: one trait, three interchangeable backends.
//!
//! The backend is picked once at startup from configuration and injected
//! into the handlers as `Arc<dyn Storage>`. "Property not found" is a
//! normal `None`, never an error; everything else propagates.

mod memory;
mod mongo;
mod seed;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AppConfig, StorageKind};
use crate::models::{
    Contact, InsertContact, InsertPartnership, InsertProperty, Partnership, Property,
};

pub use memory::MemoryStorage;
pub use mongo::MongoStorage;
pub use seed::sample_properties;
pub use sqlite::SqliteStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage connection failed: {0}")]
    Connection(String),

    #[error("storage query failed: {0}")]
    Query(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Entire property catalog, no pagination.
    async fn properties(&self) -> StorageResult<Vec<Property>>;

    /// The subset of the catalog with `featured == "true"`.
    async fn featured_properties(&self) -> StorageResult<Vec<Property>>;

    /// A single property, `None` if the id was never created.
    async fn property(&self, id: &str) -> StorageResult<Option<Property>>;

    /// Creates a property with a fresh unique id and createdAt.
    async fn create_property(&self, property: InsertProperty) -> StorageResult<Property>;

    async fn create_contact(&self, contact: InsertContact) -> StorageResult<Contact>;

    async fn create_partnership(
        &self,
        partnership: InsertPartnership,
    ) -> StorageResult<Partnership>;

    /// Releases the backend's resources. Called exactly once by the
    /// process's own lifecycle management after the server stops.
    async fn close(&self) -> StorageResult<()>;
}

/// Builds the backend the configuration names. Fails fast: a backend that
/// cannot reach its store never starts serving.
pub async fn connect(config: &AppConfig) -> StorageResult<Arc<dyn Storage>> {
    match config.storage {
        StorageKind::Memory => {
            log::info!("Using in-memory storage (data is lost on restart)");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageKind::Sqlite => {
            log::info!("Using SQLite storage at {}", config.sqlite_path);
            let storage =
                SqliteStorage::connect(&config.sqlite_path, !config.production).await?;
            Ok(Arc::new(storage))
        }
        StorageKind::MongoDb => {
            let uri = config.mongodb_uri.as_deref().ok_or_else(|| {
                StorageError::Connection("MONGODB_URI is not set".to_string())
            })?;
            log::info!("Using MongoDB storage");
            let storage = MongoStorage::connect(uri).await?;
            Ok(Arc::new(storage))
        }
    }
}

/// ISO-8601 timestamp assigned to server-created records.
pub(crate) fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
