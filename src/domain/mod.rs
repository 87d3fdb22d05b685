//! Core domain types
//!
//! Pure types with no I/O dependencies: the configuration snapshot, the
//! enumerated settings it is built from, and the resolved switch banks.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
