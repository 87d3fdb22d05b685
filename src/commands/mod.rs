//! Command handlers (driving side)
//!
//! The entry points a front end uses: load a snapshot, resolve it into a
//! report. The CLI in `cli` is one such front end.

pub mod config;
pub mod resolve;

pub use config::{load_configuration, parse_configuration};
pub use resolve::{resolve_switches, summary_lines, SwitchReport};
