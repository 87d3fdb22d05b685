//! SW2: data format (modem) or line formatting (printer) on 1–4,
//! auto line feed (5), interrupts (6), and the 40-column printer flag (7).

use super::width_switches;
use crate::domain::{Configuration, DataBits, OperationMode, Parity, StopBits, SwitchBank};

/// Resolve the second DIP bank.
pub fn resolve_bank_two(config: &Configuration) -> SwitchBank {
    let [s1, s2, s3, s4] = match config.operation_mode {
        OperationMode::Modem => modem_format(config),
        OperationMode::Printer => printer_format(config),
    };
    let s5 = config.auto_line_feed;
    let s6 = config.enable_interrupts;
    let s7 = config.operation_mode == OperationMode::Printer && config.line_width == "40";

    let bank = SwitchBank::new([s1, s2, s3, s4, s5, s6, s7]);
    log::debug!("SW2 for {}: {bank}", config.operation_mode);
    bank
}

/// Switches 1–4 in modem mode.
///
/// Stop bits only ever change switch 1; parity maps the same way for one or
/// two stop bits. Unconfirmed against the card manual.
fn modem_format(config: &Configuration) -> [bool; 4] {
    let eight_bits = config.data_bits == DataBits::Eight;
    let one_stop = config.stop_bits == StopBits::One;

    [
        one_stop,
        eight_bits,
        config.parity == Parity::Odd,
        config.parity == Parity::None,
    ]
}

/// Switches 1–4 in printer mode. The printer link is always 8N1.
fn printer_format(config: &Configuration) -> [bool; 4] {
    let [w3, w4] = width_switches(&config.line_width);
    [true, config.return_delay, w3, w4]
}
