//! SW1: baud rate (1–4), mode (5), and two switches that are always ON (6–7).

use super::baud_switches;
use crate::domain::{Configuration, OperationMode, SwitchBank};

/// Resolve the first DIP bank.
pub fn resolve_bank_one(config: &Configuration) -> SwitchBank {
    let [b1, b2, b3, b4] = baud_switches(&config.baud_rate);
    let modem = config.operation_mode == OperationMode::Modem;

    let bank = SwitchBank::new([b1, b2, b3, b4, modem, true, true]);
    log::debug!("SW1 for {} @ {}: {bank}", config.operation_mode, config.baud_rate);
    bank
}
