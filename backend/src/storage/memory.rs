use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{now_iso8601, sample_properties, Storage, StorageResult};
use crate::models::{
    Contact, InsertContact, InsertPartnership, InsertProperty, Partnership, Property,
};

#[derive(Default)]
struct Records {
    properties: Vec<Property>,
    contacts: Vec<Contact>,
    partnerships: Vec<Partnership>,
}

/// Ephemeral backend: everything lives in process memory and is gone on
/// restart. Seeds the sample catalog on construction. Ids are derived from
/// one counter shared across entity kinds.
pub struct MemoryStorage {
    records: Mutex<Records>,
    next_id: AtomicU64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let storage = Self {
            records: Mutex::new(Records::default()),
            next_id: AtomicU64::new(1),
        };
        {
            let mut records = storage.lock();
            for property in sample_properties() {
                let id = format!("prop-{}", storage.next_id.fetch_add(1, Ordering::Relaxed));
                records
                    .properties
                    .push(property.into_property(id, now_iso8601()));
            }
        }
        storage
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        // A poisoned lock only means another handler panicked mid-push;
        // the Vec itself is still consistent.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn fresh_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn properties(&self) -> StorageResult<Vec<Property>> {
        Ok(self.lock().properties.clone())
    }

    async fn featured_properties(&self) -> StorageResult<Vec<Property>> {
        Ok(self
            .lock()
            .properties
            .iter()
            .filter(|p| p.featured == "true")
            .cloned()
            .collect())
    }

    async fn property(&self, id: &str) -> StorageResult<Option<Property>> {
        Ok(self.lock().properties.iter().find(|p| p.id == id).cloned())
    }

    async fn create_property(&self, property: InsertProperty) -> StorageResult<Property> {
        let created = property.into_property(self.fresh_id("prop"), now_iso8601());
        self.lock().properties.push(created.clone());
        Ok(created)
    }

    async fn create_contact(&self, contact: InsertContact) -> StorageResult<Contact> {
        let created = contact.into_contact(self.fresh_id("contact"), now_iso8601());
        self.lock().contacts.push(created.clone());
        Ok(created)
    }

    async fn create_partnership(
        &self,
        partnership: InsertPartnership,
    ) -> StorageResult<Partnership> {
        let created = partnership.into_partnership(self.fresh_id("partner"), now_iso8601());
        self.lock().partnerships.push(created.clone());
        Ok(created)
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}
