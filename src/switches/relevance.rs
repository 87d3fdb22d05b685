//! Which form fields apply in each operation mode.
//!
//! The setup form only offers data format fields in modem mode and line
//! formatting fields in printer mode. Everything else is shared.

use crate::domain::{Field, OperationMode};

const MODEM_FIELDS: &[Field] = &[
    Field::JumperMode,
    Field::OperationMode,
    Field::BaudRate,
    Field::DataBits,
    Field::Parity,
    Field::StopBits,
    Field::AutoLineFeed,
    Field::EnableInterrupts,
];

const PRINTER_FIELDS: &[Field] = &[
    Field::JumperMode,
    Field::OperationMode,
    Field::BaudRate,
    Field::LineWidth,
    Field::ReturnDelay,
    Field::AutoLineFeed,
    Field::EnableInterrupts,
];

/// Fields that influence the result (or the summary) in `mode`, in form order.
pub fn relevant_fields(mode: OperationMode) -> &'static [Field] {
    match mode {
        OperationMode::Modem => MODEM_FIELDS,
        OperationMode::Printer => PRINTER_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modem_shows_data_format() {
        let fields = relevant_fields(OperationMode::Modem);
        assert!(fields.contains(&Field::DataBits));
        assert!(fields.contains(&Field::Parity));
        assert!(fields.contains(&Field::StopBits));
        assert!(!fields.contains(&Field::LineWidth));
        assert!(!fields.contains(&Field::ReturnDelay));
    }

    #[test]
    fn printer_shows_line_formatting() {
        let fields = relevant_fields(OperationMode::Printer);
        assert!(fields.contains(&Field::LineWidth));
        assert!(fields.contains(&Field::ReturnDelay));
        assert!(!fields.contains(&Field::DataBits));
        assert!(!fields.contains(&Field::Parity));
        assert!(!fields.contains(&Field::StopBits));
    }

    #[test]
    fn shared_fields_in_both_modes() {
        for mode in [OperationMode::Modem, OperationMode::Printer] {
            let fields = relevant_fields(mode);
            for shared in [
                Field::JumperMode,
                Field::OperationMode,
                Field::BaudRate,
                Field::AutoLineFeed,
                Field::EnableInterrupts,
            ] {
                assert!(fields.contains(&shared), "{mode:?} missing {shared:?}");
            }
        }
    }
}
