//! Plain-text renderer: draws each bank as numbered switches with ON/OFF
//! underneath, then the configuration summary.

use std::fmt::Write;

use crate::commands::SwitchReport;
use crate::domain::{SscError, SscResult, SwitchBank};
use crate::ports::ReportRenderer;

/// Column width of one switch in the drawing
const CELL: usize = 4;

pub struct TextRenderer;

impl TextRenderer {
    fn bank(out: &mut String, label: &str, bank: &SwitchBank) -> std::fmt::Result {
        write!(out, "{label:<CELL$}")?;
        for (n, _) in bank.iter() {
            write!(out, "{n:<CELL$}")?;
        }
        writeln!(out)?;

        write!(out, "{:<CELL$}", "")?;
        for (_, on) in bank.iter() {
            write!(out, "{:<CELL$}", if on { "ON" } else { "OFF" })?;
        }
        writeln!(out)
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &SwitchReport) -> SscResult<String> {
        let mut out = String::new();
        let draw = |out: &mut String| -> std::fmt::Result {
            Self::bank(out, "SW1", &report.sw1)?;
            writeln!(out)?;
            Self::bank(out, "SW2", &report.sw2)?;
            writeln!(out)?;
            writeln!(out, "Configuration Summary:")?;
            for line in &report.summary {
                writeln!(out, "• {line}")?;
            }
            Ok(())
        };
        draw(&mut out).map_err(|e| SscError::Render(format!("Text output failed: {e}")))?;

        // Trailing padding on each row is noise
        Ok(out
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            + "\n")
    }
}
