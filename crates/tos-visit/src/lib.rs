//! `tos-visit` — geofenced visit detection and per-site aggregation.
//!
//! Given a site directory, the fleet's trip logs and a [`TimeWindow`], work
//! out which vehicles stopped at each site, when they arrived and left, and
//! how long they stayed in total.
//!
//! # Pipeline
//!
//! ```text
//! for each site (in parallel):
//!   bound = GpsBound::around(center, radius, multiplier)   // PoleOverlap → skip site
//!   for each vehicle, for each trip i:
//!     i == 0 and trip.start within radius      → visit [window.start, trip.start]
//!     trip.end in bound, departure > arrival,
//!     arrival ≥ window.start, end within radius → visit [trip.end, next.start | window.end]
//! join → reports in site order (empty and skipped sites dropped)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tos_core::TimeWindow;
//! use tos_visit::{LogObserver, SiteReportAggregator, VisitConfig};
//!
//! let aggregator = SiteReportAggregator::new(VisitConfig::default())?;
//! let window = TimeWindow::ending_at(end_ms, duration_ms)?;
//! let reports = aggregator.run(&sites, &vehicles, window, &mut LogObserver::default());
//! ```
//!
//! [`TimeWindow`]: tos_core::TimeWindow

pub mod aggregator;
pub mod config;
pub mod detector;
pub mod error;
pub mod observer;
pub mod report;


pub use aggregator::{SiteOutcome, SiteReportAggregator, site_reports};
pub use config::{DEFAULT_BOUND_MULTIPLIER, VisitConfig};
pub use detector::{VisitDetector, detect_site_visits};
pub use error::{VisitError, VisitResult};
pub use observer::{LogObserver, NoopObserver, VisitObserver};
pub use report::{SiteReport, VisitLine};
