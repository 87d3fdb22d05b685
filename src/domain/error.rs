//! Domain error types
//!
//! The resolver itself never fails (unknown table keys fall back to a default).
//! These errors only come from the edges: parsing user-supplied strings,
//! loading snapshot files and rendering reports.

use thiserror::Error;

/// Errors that can occur around the switch resolver
#[derive(Error, Debug)]
pub enum SscError {
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for Super Serial Card operations
pub type SscResult<T> = Result<T, SscError>;
