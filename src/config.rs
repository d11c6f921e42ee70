//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_url: String,
    /// Logical database holding the student collection
    pub database_name: String,
    /// Collection holding the student documents
    pub collection_name: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGODB_URL` - MongoDB connection string (default: mongodb://localhost:27017)
    /// - `DATABASE_NAME` - Database name (default: student_records)
    /// - `COLLECTION_NAME` - Collection name (default: students)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            mongodb_url: env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "student_records".to_string()),
            collection_name: env::var("COLLECTION_NAME")
                .unwrap_or_else(|_| "students".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database_name: "student_records".to_string(),
            collection_name: "students".to_string(),
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "student_records");
        assert_eq!(config.collection_name, "students");
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MONGODB_URL");
        env::remove_var("DATABASE_NAME");
        env::remove_var("COLLECTION_NAME");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "student_records");
        assert_eq!(config.collection_name, "students");
        assert_eq!(config.server_port, 3000);
    }
}
