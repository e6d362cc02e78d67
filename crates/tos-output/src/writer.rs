//! The `ReportWriter` trait implemented by all backend writers.

use tos_core::TimeWindow;
use tos_visit::SiteReport;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
pub trait ReportWriter {
    /// Write the full report set for one window.
    fn write_reports(&mut self, window: TimeWindow, reports: &[SiteReport]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
