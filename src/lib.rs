//! Student Records - a record-management REST API
//!
//! Exposes create, read, filter, update, and delete endpoints over a
//! MongoDB-backed collection of student records.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::StudentStore;
