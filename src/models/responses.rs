//! Response DTOs for the student record API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::{Address, StudentDocument};

/// Response body for the create operation (POST /students/)
///
/// Carries only the newly assigned identifier, not the full record.
#[derive(Debug, Clone, Serialize)]
pub struct StudentIdResponse {
    /// Hex representation of the assigned ObjectId
    pub id: String,
}

impl StudentIdResponse {
    /// Creates a new StudentIdResponse
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Full student record view (GET /students/{id} and PATCH result)
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    /// Hex representation of the record's ObjectId
    pub id: String,
    pub name: String,
    pub age: i32,
    pub address: Address,
}

impl From<StudentDocument> for StudentResponse {
    fn from(document: StudentDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: document.name,
            age: document.age,
            address: document.address,
        }
    }
}

/// One item of the filtered list: the name/age view only.
///
/// `id` and `address` are intentionally left out of this view.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub age: i32,
}

impl From<StudentDocument> for StudentSummary {
    fn from(document: StudentDocument) -> Self {
        Self {
            name: document.name,
            age: document.age,
        }
    }
}

/// Envelope for the filtered list (GET /students/)
///
/// The items are wrapped in an object rather than returned as a bare
/// top-level JSON array.
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResponse {
    pub data: Vec<StudentSummary>,
}

impl StudentListResponse {
    /// Creates a new StudentListResponse from stored documents
    pub fn new(students: Vec<StudentDocument>) -> Self {
        Self {
            data: students.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
