//! Student Document Types
//!
//! The stored shape of a student record and its embedded address.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Address value object embedded in a student record.
///
/// Owned by its student; it has no identity or lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// A student record as stored in the collection.
///
/// `id` maps to the `_id` field: absent on documents built for insertion
/// (the store assigns one), always present on documents read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub address: Address,
}
