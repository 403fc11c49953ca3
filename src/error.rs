//! Error handling for Lookback
//!
//! The filter, grouping and selection engines are total and never fail.
//! Errors only arise at the edges: configuration, fixture files and
//! command line arguments.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lookback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Lookback operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Home directory could not be determined
    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// Invalid command line arguments
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Invalid date or timestamp
    #[error("Invalid timestamp format: {timestamp}")]
    InvalidTimestamp { timestamp: String },

    /// No record with the given id exists in the store
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    /// Two records share an id
    #[error("Duplicate record id: {id}")]
    DuplicateRecordId { id: String },

    /// Fixture file content violates a record invariant
    #[error("Invalid fixture in {path}: {reason}")]
    InvalidFixture { path: PathBuf, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {field} - {reason}")]
    ConfigValidation { field: String, reason: String },

    /// Generic error with custom message
    #[error("{message}")]
    Custom { message: String },
}

impl Error {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(message: S) -> Self {
        Error::Custom {
            message: message.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments<S: Into<String>>(message: S) -> Self {
        Error::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a config validation error
    pub fn config_validation<S: Into<String>>(field: S, reason: S) -> Self {
        Error::ConfigValidation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid fixture error
    pub fn invalid_fixture<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Error::InvalidFixture {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::RecordNotFound { .. } => true,
            Error::InvalidArguments { .. } => false,
            Error::InvalidFixture { .. } => false,
            Error::DuplicateRecordId { .. } => false,
            Error::HomeDirectoryNotFound => false,
            _ => true,
        }
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Json(_) => "json",
            Error::HomeDirectoryNotFound => "system",
            Error::InvalidArguments { .. } => "arguments",
            Error::InvalidTimestamp { .. } => "timestamp",
            Error::RecordNotFound { .. } => "record",
            Error::DuplicateRecordId { .. } => "record",
            Error::InvalidFixture { .. } => "fixture",
            Error::ConfigValidation { .. } => "config",
            Error::Custom { .. } => "custom",
        }
    }
}
