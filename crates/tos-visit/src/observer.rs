//! Observer trait for per-site progress and failure reporting.

use tos_core::BoundError;
use tos_fleet::Site;

use crate::SiteReport;

/// Callbacks invoked by [`SiteReportAggregator`][crate::SiteReportAggregator]
/// while it commits per-site results.
///
/// Calls happen on the joining thread, in site input order, after every
/// per-site task has finished.  All methods have default no-op
/// implementations so implementors only need to override what they care
/// about.
pub trait VisitObserver {
    /// Called for every site whose detection completed, including sites
    /// with zero visits.
    fn on_site_report(&mut self, _index: usize, _site: &Site, _report: &SiteReport) {}

    /// Called for every site skipped because its bounding box could not be
    /// built.
    fn on_site_skipped(&mut self, _index: usize, _site: &Site, _error: &BoundError) {}

    /// Called once with the final (non-empty) reports and the skip count.
    fn on_run_end(&mut self, _reports: &[SiteReport], _skipped: usize) {}
}

/// A [`VisitObserver`] that does nothing.
pub struct NoopObserver;

impl VisitObserver for NoopObserver {}

/// A [`VisitObserver`] that forwards events to the `log` facade.
///
/// Skipped sites are `warn`, per-site results `debug`, the run summary `info`.
#[derive(Default)]
pub struct LogObserver {
    visited: usize,
}

impl VisitObserver for LogObserver {
    fn on_site_report(&mut self, index: usize, site: &Site, report: &SiteReport) {
        if !report.is_empty() {
            self.visited += 1;
        }
        log::debug!(
            "site #{index} {:?}: {} vehicles, {} visits, {} s",
            site.name,
            report.total_unique_vehicles,
            report.total_visits,
            report.total_time_secs,
        );
    }

    fn on_site_skipped(&mut self, index: usize, site: &Site, error: &BoundError) {
        log::warn!("skipping site #{index} {:?}: {error}", site.name);
    }

    fn on_run_end(&mut self, reports: &[SiteReport], skipped: usize) {
        let visits: usize = reports.iter().map(|r| r.total_visits).sum();
        log::info!(
            "{} sites visited ({} visits), {skipped} skipped",
            self.visited,
            visits,
        );
    }
}
