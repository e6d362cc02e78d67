//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `site_summaries.csv`
//! - `visit_lines.csv`

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use tos_core::TimeWindow;
use tos_visit::SiteReport;

use crate::row::{SiteSummaryRow, VisitRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes reports to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    visits:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("site_summaries.csv"))?;
        summaries.write_record([
            "window_start_ms",
            "window_end_ms",
            "site",
            "unique_vehicles",
            "visits",
            "total_time_secs",
            "avg_visit_secs",
        ])?;

        let mut visits = Writer::from_path(dir.join("visit_lines.csv"))?;
        visits.write_record([
            "site",
            "vehicle",
            "driver",
            "arrival_ms",
            "departure_ms",
            "duration_secs",
            "lat",
            "lon",
        ])?;

        Ok(Self { summaries, visits, finished: false })
    }

    fn write_summary(&mut self, window: TimeWindow, row: &SiteSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            window.start_ms().to_string(),
            window.end_ms().to_string(),
            row.site.clone(),
            row.unique_vehicles.to_string(),
            row.visits.to_string(),
            row.total_time_secs.to_string(),
            row.avg_visit_secs.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_visit(&mut self, row: &VisitRow) -> OutputResult<()> {
        self.visits.write_record(&[
            row.site.clone(),
            row.vehicle.clone(),
            row.driver.clone(),
            row.arrival_ms.to_string(),
            row.departure_ms.to_string(),
            row.duration_secs.to_string(),
            row.lat.to_string(),
            row.lon.to_string(),
        ])?;
        Ok(())
    }
}

impl ReportWriter for CsvWriter {
    fn write_reports(&mut self, window: TimeWindow, reports: &[SiteReport]) -> OutputResult<()> {
        for report in reports {
            self.write_summary(window, &SiteSummaryRow::from(report))?;
            for line in &report.lines {
                self.write_visit(&VisitRow::new(&report.site_name, line))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.visits.flush()?;
        Ok(())
    }
}
