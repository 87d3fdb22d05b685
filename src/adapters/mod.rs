//! Adapters: concrete implementations of port traits
//!
//! - `text_renderer` - DIP switch drawing for a terminal
//! - `json_renderer` - machine-readable report

pub mod json_renderer;
pub mod text_renderer;

pub use json_renderer::JsonRenderer;
pub use text_renderer::TextRenderer;
