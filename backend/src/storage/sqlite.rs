use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use super::{now_iso8601, sample_properties, Storage, StorageError, StorageResult};
use crate::models::{
    Contact, InsertContact, InsertPartnership, InsertProperty, Partnership, Property,
};
use crate::schema::{contacts, partnerships, properties};

const PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA foreign_keys = ON;
";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS properties (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        location TEXT NOT NULL,
        description TEXT NOT NULL,
        rental_price TEXT,
        sale_price TEXT,
        size INTEGER NOT NULL,
        bedrooms INTEGER NOT NULL,
        bathrooms INTEGER NOT NULL,
        image TEXT NOT NULL,
        featured TEXT NOT NULL DEFAULT 'false',
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS contacts (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        message TEXT NOT NULL,
        property_interest TEXT,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS partnerships (
        id TEXT PRIMARY KEY,
        company_name TEXT NOT NULL,
        contact_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_properties_featured ON properties(featured);
    CREATE INDEX IF NOT EXISTS idx_properties_location ON properties(location);
    CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email);
    CREATE INDEX IF NOT EXISTS idx_partnerships_email ON partnerships(email);
";

/// File-backed backend over a single SQLite database. The connection is
/// exclusive to the process; diesel work runs on the blocking pool so
/// handlers never stall the runtime.
pub struct SqliteStorage {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl From<diesel::result::Error> for StorageError {
    fn from(e: diesel::result::Error) -> Self {
        StorageError::Query(e.to_string())
    }
}

impl SqliteStorage {
    /// Opens (creating if needed) the database file, applies the schema
    /// and, when `seed` is set and the properties table is empty, the
    /// sample catalog. Schema and seed run in one transaction so a crash
    /// mid-setup cannot leave half-created tables.
    pub async fn connect(path: &str, seed: bool) -> StorageResult<Self> {
        if let Some(dir) = Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| StorageError::Connection(e.to_string()))?;
            }
        }

        let path = path.to_string();
        let conn = tokio::task::spawn_blocking(move || -> StorageResult<SqliteConnection> {
            let mut conn = SqliteConnection::establish(&path)
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            // WAL cannot be switched on inside a transaction.
            conn.batch_execute(PRAGMAS)?;
            conn.transaction(|conn| {
                conn.batch_execute(SCHEMA)?;
                if seed {
                    let count: i64 = properties::table.count().get_result(conn)?;
                    if count == 0 {
                        log::info!("Seeding sample properties into empty database");
                        for property in sample_properties() {
                            let row = property
                                .into_property(Uuid::new_v4().to_string(), now_iso8601());
                            diesel::insert_into(properties::table)
                                .values(&row)
                                .execute(conn)?;
                        }
                    }
                }
                diesel::result::QueryResult::Ok(())
            })?;
            Ok(conn)
        })
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))??;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut conn)
        })
        .await
        .map_err(|e| StorageError::Query(format!("blocking task failed: {e}")))?
        .map_err(StorageError::from)
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn properties(&self) -> StorageResult<Vec<Property>> {
        self.with_conn(|conn| {
            properties::table
                .order(properties::created_at.desc())
                .load::<Property>(conn)
        })
        .await
    }

    async fn featured_properties(&self) -> StorageResult<Vec<Property>> {
        self.with_conn(|conn| {
            properties::table
                .filter(properties::featured.eq("true"))
                .order(properties::created_at.desc())
                .load::<Property>(conn)
        })
        .await
    }

    async fn property(&self, id: &str) -> StorageResult<Option<Property>> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            properties::table
                .find(id)
                .first::<Property>(conn)
                .optional()
        })
        .await
    }

    async fn create_property(&self, property: InsertProperty) -> StorageResult<Property> {
        let created = property.into_property(Uuid::new_v4().to_string(), now_iso8601());
        let row = created.clone();
        self.with_conn(move |conn| {
            diesel::insert_into(properties::table)
                .values(&row)
                .execute(conn)
        })
        .await?;
        Ok(created)
    }

    async fn create_contact(&self, contact: InsertContact) -> StorageResult<Contact> {
        let created = contact.into_contact(Uuid::new_v4().to_string(), now_iso8601());
        let row = created.clone();
        self.with_conn(move |conn| {
            diesel::insert_into(contacts::table).values(&row).execute(conn)
        })
        .await?;
        Ok(created)
    }

    async fn create_partnership(
        &self,
        partnership: InsertPartnership,
    ) -> StorageResult<Partnership> {
        let created = partnership.into_partnership(Uuid::new_v4().to_string(), now_iso8601());
        let row = created.clone();
        self.with_conn(move |conn| {
            diesel::insert_into(partnerships::table)
                .values(&row)
                .execute(conn)
        })
        .await?;
        Ok(created)
    }

    async fn close(&self) -> StorageResult<()> {
        // Flush the WAL back into the main file before the handle drops.
        self.with_conn(|conn| conn.batch_execute("PRAGMA wal_checkpoint(TRUNCATE);"))
            .await
    }
}
