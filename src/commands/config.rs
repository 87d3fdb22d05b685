//! Configuration snapshot loading
//!
//! Reads a JSON Configuration handed over by a front end or written by hand.
//! Fields left out of the document keep their default values. Nothing is
//! ever written back.

use std::path::Path;

use crate::domain::{Configuration, SscError, SscResult};

/// Parse a configuration snapshot from a JSON string.
pub fn parse_configuration(json: &str) -> SscResult<Configuration> {
    serde_json::from_str(json).map_err(|e| SscError::Config(format!("Failed to parse config: {e}")))
}

/// Load a configuration snapshot from a JSON file.
pub fn load_configuration(path: &Path) -> SscResult<Configuration> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        SscError::Config(format!("Failed to read config '{}': {e}", path.display()))
    })?;
    let config = parse_configuration(&json)?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
