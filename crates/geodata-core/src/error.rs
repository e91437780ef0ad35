//! Error types for the geodata service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeodataError {
    // Coordinate errors
    #[error("Invalid {axis}: {value} (expected a finite value in [{min}, {max}])")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    // Entity lookups
    #[error("User not found: {id}")]
    UserNotFound { id: String },

    #[error("File not found: {id}")]
    FileNotFound { id: u64 },

    #[error("Measurement instance not found: {id}")]
    InstanceNotFound { id: String },

    // Upload format errors
    #[error("Unsupported file format '{extension}'. Supported: {supported:?}")]
    UnsupportedFormat {
        extension: String,
        supported: Vec<String>,
    },

    #[error("{format} validation failed: {reason}")]
    FormatValidation { format: String, reason: String },

    // Request field errors
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeodataError>;
