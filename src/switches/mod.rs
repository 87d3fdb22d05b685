//! Switch resolver for the Super Serial Card.
//!
//! Everything in here is a pure function of a `Configuration` snapshot:
//! - `sw1`: baud rate and mode → SW1
//! - `sw2`: data format or printer formatting → SW2
//! - `relevance`: which form fields matter in each mode
//!
//! The lookup tables below are the only shared data and are never mutated.

pub mod relevance;
pub mod sw1;
pub mod sw2;

pub use relevance::relevant_fields;
pub use sw1::resolve_bank_one;
pub use sw2::resolve_bank_two;

use crate::domain::{Configuration, OperationMode, Slot};

/// Baud rate used when a rate is not in `BAUD_TABLE`
pub const FALLBACK_BAUD: &str = "9600";

/// `BAUD_TABLE` row for `FALLBACK_BAUD`
pub const FALLBACK_BAUD_SWITCHES: [bool; 4] = [false, false, false, true];

/// Line width used when a width is not in `WIDTH_TABLE`
pub const FALLBACK_WIDTH: &str = "80";

/// `WIDTH_TABLE` row for `FALLBACK_WIDTH`
pub const FALLBACK_WIDTH_SWITCHES: [bool; 2] = [false, true];

/// The 15 rates the card supports, slowest first
pub const BAUD_RATES: [&str; 15] = [
    "50", "75", "110", "135", "150", "300", "600", "1200", "1800", "2400", "3600", "4800",
    "7200", "9600", "19200",
];

/// Baud rate → SW1 switches 1–4.
pub const BAUD_TABLE: &[(&str, [bool; 4])] = &[
    ("50", [true, true, true, false]),
    ("75", [true, true, false, true]),
    ("110", [true, true, false, false]),
    ("135", [true, false, true, true]),
    ("150", [true, false, true, false]),
    ("300", [true, false, false, true]),
    ("600", [true, false, false, false]),
    ("1200", [false, true, true, true]),
    ("1800", [false, true, true, false]),
    ("2400", [false, true, false, true]),
    ("3600", [false, true, false, false]),
    ("4800", [false, false, true, true]),
    ("7200", [false, false, true, false]),
    ("9600", [false, false, false, true]),
    ("19200", [false, false, false, false]),
];

/// Printer line width (columns) → SW2 switches 3–4.
pub const WIDTH_TABLE: &[(&str, [bool; 2])] = &[
    ("40", [true, true]),
    ("72", [true, false]),
    ("80", [false, true]),
    ("132", [false, false]),
];

/// SW1 1–4 for a baud rate, falling back to the 9600 row for unknown rates.
pub fn baud_switches(baud_rate: &str) -> [bool; 4] {
    BAUD_TABLE
        .iter()
        .find(|(rate, _)| *rate == baud_rate)
        .map(|(_, sw)| *sw)
        .unwrap_or_else(|| {
            log::warn!("unknown baud rate '{baud_rate}', falling back to {FALLBACK_BAUD}");
            FALLBACK_BAUD_SWITCHES
        })
}

/// SW2 3–4 for a printer line width, falling back to 80 columns.
pub fn width_switches(line_width: &str) -> [bool; 2] {
    WIDTH_TABLE
        .iter()
        .find(|(width, _)| *width == line_width)
        .map(|(_, sw)| *sw)
        .unwrap_or_else(|| {
            log::warn!("unknown line width '{line_width}', falling back to {FALLBACK_WIDTH} columns");
            FALLBACK_WIDTH_SWITCHES
        })
}

/// Slot the card should go in. Only the operation mode matters.
pub fn recommend_slot(config: &Configuration) -> Slot {
    match config.operation_mode {
        OperationMode::Printer => Slot::SlotA,
        OperationMode::Modem => Slot::SlotB,
    }
}
