//! Request DTOs for the student record API
//!
//! Defines the structure of incoming HTTP request bodies and query params.

use serde::{Deserialize, Deserializer};

use crate::store::Address;

/// Request body for creating a student (POST /students/)
///
/// Any `id` supplied by the client is ignored; the store assigns one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    /// Full name, must be non-empty
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Residential address, both fields required
    pub address: Address,
}

impl CreateStudentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("name cannot be empty".to_string());
        }
        if self.address.city.is_empty() {
            return Some("address.city cannot be empty".to_string());
        }
        if self.address.country.is_empty() {
            return Some("address.country cannot be empty".to_string());
        }
        None
    }
}

/// Partial update body for PATCH /students/{id}
///
/// Every field is tri-state: absent from the payload deserializes to `None`,
/// an explicit `null` to `Some(None)`, a value to `Some(Some(value))`. Only
/// the last form enters the change-set; the other two leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "present_or_null")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub address: Option<Option<Address>>,
}

/// Wraps a field that is present in the payload in `Some`, keeping the inner
/// `Option` to record an explicit `null`.
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query parameters for the filtered list (GET /students/)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilterParams {
    /// Exact match on `address.country`
    pub country: Option<String>,
    /// Lower bound on `age` (matches age >= value)
    pub age: Option<i32>,
}
