//! Store Module
//!
//! MongoDB-backed persistence for student records.

mod document;
mod students;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use document::{Address, StudentDocument};
pub use students::{change_set, filter_document, StudentStore};

// == Public Constants ==
/// Maximum number of documents a filtered list returns.
///
/// Larger result sets are silently truncated; there is no pagination token.
pub const MAX_LIST_RESULTS: i64 = 1000;
