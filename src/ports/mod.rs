//! Port traits (interfaces)
//!
//! The boundary between the pure resolver and whatever presents its output.
//! Adapters implement these traits for each output format.

pub mod render;

pub use render::*;
