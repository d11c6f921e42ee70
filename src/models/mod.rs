//! Request and Response models for the student record API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateStudentRequest, StudentFilterParams, UpdateStudentRequest};
pub use responses::{
    ErrorResponse, HealthResponse, StudentIdResponse, StudentListResponse, StudentResponse,
    StudentSummary,
};
