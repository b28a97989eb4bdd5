use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::{now_iso8601, Storage, StorageError, StorageResult};
use crate::models::{
    Contact, InsertContact, InsertPartnership, InsertProperty, Partnership, Property,
};

const DEFAULT_DATABASE: &str = "residence_finder";

// Collection documents keep the entity's camelCase field names; the
// store-assigned ObjectId is surfaced to callers as the string id.

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    location: String,
    description: String,
    rental_price: Option<String>,
    sale_price: Option<String>,
    size: i32,
    bedrooms: i32,
    bathrooms: i32,
    image: String,
    featured: String,
    created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    property_interest: Option<String>,
    created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartnershipDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    company_name: String,
    contact_name: String,
    email: String,
    phone: String,
    message: String,
    created_at: String,
}

impl PropertyDocument {
    fn from_property(p: &Property) -> Self {
        Self {
            id: None,
            name: p.name.clone(),
            location: p.location.clone(),
            description: p.description.clone(),
            rental_price: p.rental_price.clone(),
            sale_price: p.sale_price.clone(),
            size: p.size,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            image: p.image.clone(),
            featured: p.featured.clone(),
            created_at: p.created_at.clone(),
        }
    }

    fn into_property(self) -> Property {
        Property {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            location: self.location,
            description: self.description,
            rental_price: self.rental_price,
            sale_price: self.sale_price,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            image: self.image,
            featured: self.featured,
            created_at: self.created_at,
        }
    }
}

fn inserted_id_hex(value: &Bson) -> StorageResult<String> {
    value
        .as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| StorageError::Query("inserted _id is not an ObjectId".to_string()))
}

/// Remote document-store backend over the official MongoDB driver. The
/// client is connected, pinged and indexed once before any operation is
/// served; network partition is the dominant failure mode, so connect and
/// server-selection timeouts are short.
pub struct MongoStorage {
    client: Client,
    properties: Collection<PropertyDocument>,
    contacts: Collection<ContactDocument>,
    partnerships: Collection<PartnershipDocument>,
}

impl From<mongodb::error::Error> for StorageError {
    fn from(e: mongodb::error::Error) -> Self {
        StorageError::Query(e.to_string())
    }
}

impl MongoStorage {
    pub async fn connect(uri: &str) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        options.app_name = Some("residence-finder-backend".to_string());
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(options)
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        // Fail startup here rather than on the first request.
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let storage = Self {
            properties: db.collection("properties"),
            contacts: db.collection("contacts"),
            partnerships: db.collection("partnerships"),
            client,
        };
        storage.ensure_indexes().await?;
        Ok(storage)
    }

    async fn ensure_indexes(&self) -> StorageResult<()> {
        let index = |keys| IndexModel::builder().keys(keys).build();
        self.properties
            .create_index(index(doc! { "name": 1 }), None)
            .await?;
        self.properties
            .create_index(index(doc! { "featured": 1 }), None)
            .await?;
        self.contacts
            .create_index(index(doc! { "email": 1 }), None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for MongoStorage {
    async fn properties(&self) -> StorageResult<Vec<Property>> {
        let cursor = self.properties.find(None, None).await?;
        let docs: Vec<PropertyDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(PropertyDocument::into_property).collect())
    }

    async fn featured_properties(&self) -> StorageResult<Vec<Property>> {
        let cursor = self.properties.find(doc! { "featured": "true" }, None).await?;
        let docs: Vec<PropertyDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(PropertyDocument::into_property).collect())
    }

    async fn property(&self, id: &str) -> StorageResult<Option<Property>> {
        // An id this store never issued cannot match anything.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let doc = self.properties.find_one(doc! { "_id": oid }, None).await?;
        Ok(doc.map(PropertyDocument::into_property))
    }

    async fn create_property(&self, property: InsertProperty) -> StorageResult<Property> {
        let mut created = property.into_property(String::new(), now_iso8601());
        let doc = PropertyDocument::from_property(&created);
        let result = self.properties.insert_one(&doc, None).await?;
        created.id = inserted_id_hex(&result.inserted_id)?;
        Ok(created)
    }

    async fn create_contact(&self, contact: InsertContact) -> StorageResult<Contact> {
        let mut created = contact.into_contact(String::new(), now_iso8601());
        let doc = ContactDocument {
            id: None,
            name: created.name.clone(),
            email: created.email.clone(),
            phone: created.phone.clone(),
            message: created.message.clone(),
            property_interest: created.property_interest.clone(),
            created_at: created.created_at.clone(),
        };
        let result = self.contacts.insert_one(&doc, None).await?;
        created.id = inserted_id_hex(&result.inserted_id)?;
        Ok(created)
    }

    async fn create_partnership(
        &self,
        partnership: InsertPartnership,
    ) -> StorageResult<Partnership> {
        let mut created = partnership.into_partnership(String::new(), now_iso8601());
        let doc = PartnershipDocument {
            id: None,
            company_name: created.company_name.clone(),
            contact_name: created.contact_name.clone(),
            email: created.email.clone(),
            phone: created.phone.clone(),
            message: created.message.clone(),
            created_at: created.created_at.clone(),
        };
        let result = self.partnerships.insert_one(&doc, None).await?;
        created.id = inserted_id_hex(&result.inserted_id)?;
        Ok(created)
    }

    async fn close(&self) -> StorageResult<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
