//! API Module
//!
//! HTTP handlers and routing for the student record REST API.
//!
//! # Endpoints
//! - `POST /students/` - Create a student record
//! - `GET /students/` - List students, optionally filtered by country/age
//! - `GET /students/:id` - Retrieve one student record
//! - `PATCH /students/:id` - Partially update a student record
//! - `DELETE /students/:id` - Delete a student record
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
