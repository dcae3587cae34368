//! Core error types for lifetrack-core.
//!
//! Every fallible operation in the library returns one of these. Nothing in
//! here is fatal to the application: storage failures surface to the
//! caller, malformed state is recovered from before it ever becomes an
//! error, and grammar failures are folded into a status message by
//! [`crate::grammar::check_journal_grammar`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifetrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Grammar service errors
    #[error("Grammar check error: {0}")]
    Grammar(#[from] GrammarError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a [`crate::storage::StateStorage`] backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store
    #[error("Failed to open storage at {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    /// Reading the state blob failed
    #[error("Failed to read state: {0}")]
    ReadFailed(String),

    /// Writing the state blob failed
    #[error("Failed to write state: {0}")]
    WriteFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// No usable data directory
    #[error("Cannot determine data directory: {0}")]
    NoDataDir(String),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was blank
    #[error("'{field}' is required")]
    MissingField { field: &'static str },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// No record with this id
    #[error("No {collection} with id '{id}'")]
    NotFound { collection: &'static str, id: String },
}

/// Errors from the grammar-check collaborator.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// API key variable not set
    #[error("API key not configured (expected in ${0})")]
    MissingApiKey(String),

    /// Transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response did not have the expected shape
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) if e.code == rusqlite::ErrorCode::DatabaseLocked => {
                StorageError::Locked
            }
            _ => StorageError::ReadFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
