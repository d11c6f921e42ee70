//! Error types for the student record service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Student Error Enum ==
/// Unified error type for the student record service.
#[derive(Error, Debug)]
pub enum StudentError {
    /// Request payload failed validation
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Path identifier is not a valid ObjectId
    #[error("Invalid student id: {0}")]
    InvalidId(String),

    /// No student matches the given id
    #[error("Student {0} not found")]
    NotFound(String),

    /// Underlying document store failed
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            StudentError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            StudentError::InvalidId(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            StudentError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            StudentError::Store(err) => {
                // Driver details stay server-side; the client gets an opaque 500.
                tracing::error!(error = %err, "document store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student record service.
pub type Result<T> = std::result::Result<T, StudentError>;
