//! Super Serial Card DIP switch calculator
//!
//! Works out the SW1/SW2 DIP switch settings for an Apple II Super Serial Card
//! from a handful of choices: operation mode, baud rate, data format and
//! printer formatting.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `switches/` - Switch resolver (lookup tables, pure functions)
//! - `ports/` - Trait definitions for presenting results
//! - `adapters/` - Implementations of ports (text and JSON renderers)
//! - `commands/` - Entry points a front end drives (load, resolve)
//! - `cli` - Command-line front end

// Core domain (pure, no I/O)
pub mod domain;
pub mod switches;
pub mod ports;

// Adapters (output)
pub mod adapters;

// Front ends
pub mod cli;
pub mod commands;

use clap::Parser;

/// CLI entry point. Returns the process exit code.
pub fn run() -> i32 {
    env_logger::init();

    let args = cli::Args::parse();
    match cli::execute(&args) {
        Ok(out) => {
            print!("{out}");
            0
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            1
        }
    }
}
