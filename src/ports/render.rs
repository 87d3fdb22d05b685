//! Report rendering trait

use crate::commands::SwitchReport;
use crate::domain::SscResult;

/// Turns a resolved report into something a person (or another program) reads.
pub trait ReportRenderer {
    fn render(&self, report: &SwitchReport) -> SscResult<String>;
}
