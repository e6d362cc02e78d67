//! Concurrent per-site fan-out and the sequential join that follows it.
//!
//! # Two-phase run
//!
//! ```text
//! ① Fan-out — one VisitDetector per site on Rayon's pool.  Each task reads
//!             the shared fleet and returns its outcome; the collected Vec
//!             has one slot per site, in site order.
//! ② Commit  — sequentially, in site order: notify the observer, keep
//!             non-empty reports, count skipped sites.
//! ```
//!
//! Tasks never share mutable state, so the parallel and sequential paths
//! produce identical reports.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use tos_core::{BoundError, TimeWindow};
use tos_fleet::{Site, Vehicle};

use crate::detector::detect_site_visits;
use crate::{SiteReport, VisitConfig, VisitObserver, VisitResult};

/// Result of running detection for one site.
pub type SiteOutcome = Result<SiteReport, BoundError>;

/// Runs visit detection for every site and assembles the report set.
///
/// # Example
///
/// ```rust,ignore
/// let aggregator = SiteReportAggregator::new(VisitConfig::default())?;
/// let window = TimeWindow::ending_at(end_ms, duration_ms)?;
/// let reports = aggregator.run(&sites, &vehicles, window, &mut LogObserver::default());
/// ```
pub struct SiteReportAggregator {
    config: VisitConfig,
    /// Dedicated pool when `config.num_threads` is set; otherwise the global one.
    pool:   Option<ThreadPool>,
}

impl SiteReportAggregator {
    /// Validate `config` and build the worker pool if one was requested.
    pub fn new(config: VisitConfig) -> VisitResult<Self> {
        config.validate()?;
        let pool = match config.num_threads {
            Some(n) => Some(ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &VisitConfig {
        &self.config
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Detect visits for all sites in parallel.
    ///
    /// Returns one report per visited site, in site input order.  Sites with
    /// no visits and sites whose bounds fail are omitted; the latter are
    /// reported through [`VisitObserver::on_site_skipped`].
    pub fn run<O: VisitObserver>(
        &self,
        sites:    &[Site],
        vehicles: &[Vehicle],
        window:   TimeWindow,
        observer: &mut O,
    ) -> Vec<SiteReport> {
        let outcomes = self.outcomes(sites, vehicles, window);
        commit(sites, outcomes, observer)
    }

    /// Same as [`run`][Self::run] but on the calling thread only.
    pub fn run_sequential<O: VisitObserver>(
        &self,
        sites:    &[Site],
        vehicles: &[Vehicle],
        window:   TimeWindow,
        observer: &mut O,
    ) -> Vec<SiteReport> {
        let multiplier = self.config.bound_multiplier;
        let outcomes = sites
            .iter()
            .map(|site| detect_site_visits(site, vehicles, window, multiplier))
            .collect();
        commit(sites, outcomes, observer)
    }

    /// Per-site outcomes, one slot per input site (parallel).
    ///
    /// Unlike [`run`][Self::run], empty reports and failures keep their slot.
    pub fn outcomes(
        &self,
        sites:    &[Site],
        vehicles: &[Vehicle],
        window:   TimeWindow,
    ) -> Vec<SiteOutcome> {
        let multiplier = self.config.bound_multiplier;
        match &self.pool {
            Some(pool) => pool.install(|| fan_out(sites, vehicles, window, multiplier)),
            None => fan_out(sites, vehicles, window, multiplier),
        }
    }
}

// ── Phases ────────────────────────────────────────────────────────────────────

/// Parallel phase.  `collect` into a `Vec` keeps the site index of every slot.
fn fan_out(
    sites:      &[Site],
    vehicles:   &[Vehicle],
    window:     TimeWindow,
    multiplier: f32,
) -> Vec<SiteOutcome> {
    sites
        .par_iter()
        .map(|site| detect_site_visits(site, vehicles, window, multiplier))
        .collect()
}

/// Sequential phase.
fn commit<O: VisitObserver>(
    sites:    &[Site],
    outcomes: Vec<SiteOutcome>,
    observer: &mut O,
) -> Vec<SiteReport> {
    let mut reports = Vec::with_capacity(outcomes.len());
    let mut skipped = 0;

    for (index, (site, outcome)) in sites.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(report) => {
                observer.on_site_report(index, site, &report);
                if !report.is_empty() {
                    reports.push(report);
                }
            }
            Err(error) => {
                observer.on_site_skipped(index, site, &error);
                skipped += 1;
            }
        }
    }

    observer.on_run_end(&reports, skipped);
    reports
}

/// One-shot helper: default worker pool, the given multiplier, and a
/// [`LogObserver`][crate::LogObserver] so skipped sites are logged at `warn`.
pub fn site_reports(
    sites:      &[Site],
    vehicles:   &[Vehicle],
    window:     TimeWindow,
    multiplier: f32,
) -> VisitResult<Vec<SiteReport>> {
    let aggregator = SiteReportAggregator::new(VisitConfig::with_multiplier(multiplier))?;
    Ok(aggregator.run(sites, vehicles, window, &mut crate::LogObserver::default()))
}
