//! Resolve command: one configuration snapshot in, one full report out
//!
//! This is what a front end calls on every field change. It runs every
//! resolver operation against the same snapshot and bundles the results.

use serde::Serialize;

use crate::domain::{Configuration, OperationMode, Slot, StopBits, SwitchBank};
use crate::switches::{recommend_slot, resolve_bank_one, resolve_bank_two};

/// Everything the front end needs to draw the switches and the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchReport {
    pub sw1: SwitchBank,
    pub sw2: SwitchBank,
    pub slot: Slot,
    pub summary: Vec<String>,
}

pub fn resolve_switches(config: &Configuration) -> SwitchReport {
    SwitchReport {
        sw1: resolve_bank_one(config),
        sw2: resolve_bank_two(config),
        slot: recommend_slot(config),
        summary: summary_lines(config),
    }
}

/// Human-readable configuration summary, one line per item.
pub fn summary_lines(config: &Configuration) -> Vec<String> {
    let mut lines = vec![
        format!("Jumper Block: {}", config.jumper_mode.orientation()),
        format!("Operation Mode: {}", config.operation_mode),
        format!("Baud Rate: {}", config.baud_rate),
    ];

    match config.operation_mode {
        OperationMode::Modem => {
            let plural = if config.stop_bits == StopBits::Two { "s" } else { "" };
            lines.push(format!(
                "Data Format: {} data bits, {} parity, {} stop bit{plural}",
                config.data_bits.count(),
                config.parity.name(),
                config.stop_bits.count(),
            ));
        }
        OperationMode::Printer => {
            lines.push(format!("Line Width: {} columns", config.line_width));
        }
    }

    lines.push(format!("Recommended Slot: {}", recommend_slot(config)));
    lines
}
