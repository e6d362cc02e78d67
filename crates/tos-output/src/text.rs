//! Plain-text console backend.
//!
//! ```text
//! Depot North                              3     5 1h 12m
//!   truck-7  Ana                2018-10-24 00:02:09  2018-10-24 00:40:00      37m 51s 37.000000 -122.000000
//! ```
//!
//! The summary line is site name, unique vehicles, visits, and average time
//! per visit.  Visit lines only appear in expanded mode.

use std::io::Write;

use tos_core::TimeWindow;
use tos_visit::SiteReport;

use crate::format::{format_duration, format_timestamp_ms};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes a fixed-width text report to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:      W,
    expanded: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W, expanded: bool) -> Self {
        Self { out, expanded }
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_reports(&mut self, window: TimeWindow, reports: &[SiteReport]) -> OutputResult<()> {
        writeln!(
            self.out,
            "Time on site {} to {} (UTC)",
            format_timestamp_ms(window.start_ms()),
            format_timestamp_ms(window.end_ms()),
        )?;
        writeln!(self.out)?;

        for report in reports {
            let Some(avg) = report.average_visit_secs() else {
                continue;
            };
            writeln!(
                self.out,
                "{:<40} {:<5} {:<5} {}",
                report.site_name,
                report.total_unique_vehicles,
                report.total_visits,
                format_duration(avg),
            )?;

            if self.expanded {
                for line in &report.lines {
                    writeln!(
                        self.out,
                        "  {:<8} {:<18} {:<20} {:<20} {:>12} {:.6} {:.6}",
                        line.vehicle,
                        line.driver,
                        format_timestamp_ms(line.arrival_ms),
                        format_timestamp_ms(line.departure_ms),
                        format_duration(line.duration_secs()),
                        line.point.lat,
                        line.point.lon,
                    )?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
