//! Core error types for focusxp-core.
//!
//! Scoring never fails: invalid inputs fall back to neutral values. The
//! errors here cover the storage backend, configuration files, and the
//! handful of caller mistakes that cannot be degraded silently.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusxp-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage backend errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Storage backend errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema setup failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked by another process
    #[error("Database is locked")]
    Locked,

    /// A stored table could not be decoded
    #[error("Table '{table}' is corrupt: {message}")]
    Corrupt { table: &'static str, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not one of the accepted variants
    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _msg) => {
                if inner.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_kind_and_id() {
        let err = CoreError::not_found("project", "abc");
        assert_eq!(err.to_string(), "project not found: abc");
    }

    #[test]
    fn unknown_variant_lists_expected_values() {
        let err = ValidationError::UnknownVariant {
            field: "willpower",
            value: "extreme".into(),
            expected: "high, medium, low",
        };
        assert!(err.to_string().contains("extreme"));
        assert!(err.to_string().contains("high, medium, low"));
    }

    #[test]
    fn sqlite_errors_map_to_query_failed() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }
}
