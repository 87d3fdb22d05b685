//! JSON renderer for scripts and other front ends

use crate::commands::SwitchReport;
use crate::domain::{SscError, SscResult};
use crate::ports::ReportRenderer;

pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &SwitchReport) -> SscResult<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| SscError::Render(format!("Serialization error: {e}")))
    }
}
