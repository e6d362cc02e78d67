//! `tos-output` — presentation of time-on-site reports.
//!
//! | Backend       | Target                                             |
//! |---------------|----------------------------------------------------|
//! | [`TextWriter`]| Any `io::Write` (stdout), optional per-visit lines |
//! | [`CsvWriter`] | `site_summaries.csv`, `visit_lines.csv`            |
//!
//! Both implement [`ReportWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tos_output::{ReportWriter, TextWriter};
//!
//! let mut text = TextWriter::new(std::io::stdout().lock(), expanded);
//! text.write_reports(window, &reports)?;
//! text.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{format_duration, format_timestamp_ms};
pub use row::{SiteSummaryRow, VisitRow};
pub use text::TextWriter;
pub use writer::ReportWriter;
