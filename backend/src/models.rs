use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A rental/sale unit listing. `featured` is stored as the text
/// "true"/"false", mirroring the persisted column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Insertable)]
#[diesel(table_name = crate::schema::properties)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: Option<String>, // decimal as text
    pub sale_price: Option<String>,   // decimal as text
    pub size: i32,                    // sqm
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub image: String,
    pub featured: String,
    pub created_at: String, // ISO-8601
}

/// A visitor inquiry from the contact or property-detail form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Insertable)]
#[diesel(table_name = crate::schema::contacts)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_interest: Option<String>, // soft reference, may dangle
    pub created_at: String,
}

/// A business-partnership application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Insertable)]
#[diesel(table_name = crate::schema::partnerships)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: String,
}

/// Client-supplied fields for creating a Property; id/createdAt are
/// backend-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProperty {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: Option<String>,
    pub sale_price: Option<String>,
    pub size: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub image: String,
    pub featured: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_interest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPartnership {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

// Every backend materializes insert payloads through these, so omitted
// optionals always land as null / "false" in the stored record.

impl InsertProperty {
    pub fn into_property(self, id: String, created_at: String) -> Property {
        Property {
            id,
            name: self.name,
            location: self.location,
            description: self.description,
            rental_price: self.rental_price,
            sale_price: self.sale_price,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            image: self.image,
            featured: self.featured.unwrap_or_else(|| "false".to_string()),
            created_at,
        }
    }
}

impl InsertContact {
    pub fn into_contact(self, id: String, created_at: String) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            property_interest: self.property_interest,
            created_at,
        }
    }
}

impl InsertPartnership {
    pub fn into_partnership(self, id: String, created_at: String) -> Partnership {
        Partnership {
            id,
            company_name: self.company_name,
            contact_name: self.contact_name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at,
        }
    }
}
