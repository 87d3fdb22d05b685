//! Card configuration snapshot
//!
//! A Configuration is the full set of choices made on the setup form. The
//! caller owns and mutates its own copy; the resolver only ever sees it by
//! reference and recomputes both banks from scratch every time.

use serde::{Deserialize, Deserializer, Serialize};

use super::types::{DataBits, Field, JumperMode, OperationMode, Parity, StopBits};
use crate::switches;

/// Everything needed to work out SW1 and SW2.
///
/// Fields that do not apply to the current `operation_mode` may hold any
/// value; they never affect the resolved banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Jumper block orientation (summary only, does not touch the banks)
    pub jumper_mode: JumperMode,
    pub operation_mode: OperationMode,
    /// Baud rate as printed in the manual, e.g. "9600"
    pub baud_rate: String,
    /// Modem mode only
    pub data_bits: DataBits,
    /// Modem mode only
    pub parity: Parity,
    /// Modem mode only
    pub stop_bits: StopBits,
    /// Printer mode only; columns per line ("40", "72", "80" or "132")
    #[serde(deserialize_with = "lenient_width")]
    pub line_width: String,
    /// Send LF after every CR
    pub auto_line_feed: bool,
    pub enable_interrupts: bool,
    /// Printer mode only; 32ms pause after RETURN
    pub return_delay: bool,
}

/// Accepts the width as a string or a bare number. Any other JSON value is
/// kept as an empty string so the resolver falls back to 80 columns.
fn lenient_width<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Width {
        Text(String),
        Columns(u64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Width::deserialize(deserializer)? {
        Width::Text(text) => text,
        Width::Columns(columns) => columns.to_string(),
        Width::Other(_) => String::new(),
    })
}

impl Configuration {
    /// Fields the form should offer for this configuration's mode
    pub fn relevant_fields(&self) -> &'static [Field] {
        switches::relevant_fields(self.operation_mode)
    }

    pub fn is_relevant(&self, field: Field) -> bool {
        self.relevant_fields().contains(&field)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            jumper_mode: JumperMode::Modem,
            operation_mode: OperationMode::Modem,
            baud_rate: "9600".to_string(),
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            line_width: "80".to_string(),
            auto_line_feed: false,
            enable_interrupts: true,
            return_delay: false,
        }
    }
}
