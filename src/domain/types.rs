//! Core domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SscError;

/// Number of switches on each DIP bank (SW1 and SW2)
pub const BANK_SIZE: usize = 7;

/// What the card is being set up to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Modem,
    Printer,
}

impl OperationMode {
    pub fn name(&self) -> &'static str {
        match self {
            OperationMode::Modem => "Modem",
            OperationMode::Printer => "Printer",
        }
    }
}

impl FromStr for OperationMode {
    type Err = SscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modem" => Ok(OperationMode::Modem),
            "printer" => Ok(OperationMode::Printer),
            _ => Err(SscError::InvalidValue {
                field: "operation mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of the jumper block.
/// Printer = arrow points DOWN, Modem = arrow points UP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumperMode {
    Printer,
    Modem,
}

impl JumperMode {
    /// Human description of the physical jumper position
    pub fn orientation(&self) -> &'static str {
        match self {
            JumperMode::Printer => "Arrow DOWN (Printer)",
            JumperMode::Modem => "Arrow UP (Modem)",
        }
    }
}

impl FromStr for JumperMode {
    type Err = SscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "printer" => Ok(JumperMode::Printer),
            "modem" => Ok(JumperMode::Modem),
            _ => Err(SscError::InvalidValue {
                field: "jumper mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Character length in modem mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataBits {
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
}

impl DataBits {
    pub fn count(&self) -> u8 {
        match self {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        }
    }
}

impl FromStr for DataBits {
    type Err = SscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(DataBits::Seven),
            "8" => Ok(DataBits::Eight),
            _ => Err(SscError::InvalidValue {
                field: "data bits",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    None,
    Odd,
    Even,
}

impl Parity {
    /// Lowercase name, as shown in the data format summary
    pub fn name(&self) -> &'static str {
        match self {
            Parity::None => "none",
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

impl FromStr for Parity {
    type Err = SscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Parity::None),
            "odd" => Ok(Parity::Odd),
            "even" => Ok(Parity::Even),
            _ => Err(SscError::InvalidValue {
                field: "parity",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopBits {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl StopBits {
    pub fn count(&self) -> u8 {
        match self {
            StopBits::One => 1,
            StopBits::Two => 2,
        }
    }
}

impl FromStr for StopBits {
    type Err = SscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(StopBits::One),
            "2" => Ok(StopBits::Two),
            _ => Err(SscError::InvalidValue {
                field: "stop bits",
                value: s.to_string(),
            }),
        }
    }
}

/// Peripheral slot the card should be installed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "Slot 1")]
    SlotA,
    #[serde(rename = "Slot 2")]
    SlotB,
}

impl Slot {
    pub fn number(&self) -> u8 {
        match self {
            Slot::SlotA => 1,
            Slot::SlotB => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot {}", self.number())
    }
}

/// One physical DIP bank. Index 0 holds switch 1; `true` means ON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwitchBank(pub [bool; BANK_SIZE]);

impl SwitchBank {
    pub fn new(switches: [bool; BANK_SIZE]) -> Self {
        Self(switches)
    }

    /// State of switch `n`, numbered 1..=7 as printed on the card
    pub fn position(&self, n: usize) -> Option<bool> {
        n.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    pub fn switches(&self) -> &[bool; BANK_SIZE] {
        &self.0
    }

    /// Iterate `(switch number, is_on)` pairs in physical order
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0.iter().enumerate().map(|(i, &on)| (i + 1, on))
    }
}

impl fmt::Display for SwitchBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, on) in self.iter() {
            if n > 1 {
                f.write_str(" ")?;
            }
            write!(f, "{n}:{}", if on { "ON" } else { "OFF" })?;
        }
        Ok(())
    }
}

/// A user-facing configuration field, used to decide what to show per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    JumperMode,
    OperationMode,
    BaudRate,
    DataBits,
    Parity,
    StopBits,
    LineWidth,
    ReturnDelay,
    AutoLineFeed,
    EnableInterrupts,
}

impl Field {
    /// Form label for this field
    pub fn label(&self) -> &'static str {
        match self {
            Field::JumperMode => "Jumper Block",
            Field::OperationMode => "Operation Mode",
            Field::BaudRate => "Baud Rate",
            Field::DataBits => "Data Bits",
            Field::Parity => "Parity",
            Field::StopBits => "Stop Bits",
            Field::LineWidth => "Line Width",
            Field::ReturnDelay => "32ms Return Delay",
            Field::AutoLineFeed => "Auto Line Feed after CR",
            Field::EnableInterrupts => "Enable Interrupts",
        }
    }
}
