//! Error types for the planning library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planning operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Requested plant name missing from the catalog
    #[error("Plant '{name}' not found in the catalog")]
    UnknownPlant { name: String },
    /// Malformed grid data (ragged rows, empty matrix, bad cell values)
    #[error("Invalid grid: {reason}")]
    InvalidGrid { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown-plant error for the given name.
    pub fn unknown_plant(name: impl Into<String>) -> Self {
        PlanError::UnknownPlant { name: name.into() }
    }

    /// Creates a grid validation error.
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        PlanError::InvalidGrid {
            reason: reason.into(),
        }
    }
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;
