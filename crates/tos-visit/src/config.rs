//! Run configuration for visit detection.

use crate::{VisitError, VisitResult};

/// Default widening applied to geofence bounding boxes.
pub const DEFAULT_BOUND_MULTIPLIER: f32 = 2.0;

/// Tunables for a report run.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// [`SiteReportAggregator::new`][crate::SiteReportAggregator::new].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct VisitConfig {
    /// Factor (≥ 1) by which the bounding-box pre-filter is widened beyond
    /// the geofence radius.  Larger values admit more candidates to the
    /// haversine test; values below the longitude stretch `1 / cos(lat)` can
    /// reject points near the east/west edge of high-latitude sites.
    #[cfg_attr(feature = "serde", serde(alias = "BoundMulti"))]
    pub bound_multiplier: f32,

    /// Worker thread count for the per-site fan-out.  `None` uses Rayon's
    /// global pool (all logical cores).
    pub num_threads: Option<usize>,
}

impl Default for VisitConfig {
    fn default() -> Self {
        Self {
            bound_multiplier: DEFAULT_BOUND_MULTIPLIER,
            num_threads:      None,
        }
    }
}

impl VisitConfig {
    pub fn with_multiplier(bound_multiplier: f32) -> Self {
        Self { bound_multiplier, ..Self::default() }
    }

    pub fn validate(&self) -> VisitResult<()> {
        if !self.bound_multiplier.is_finite() || self.bound_multiplier < 1.0 {
            return Err(VisitError::Config(format!(
                "bound multiplier must be a finite value >= 1, got {}",
                self.bound_multiplier
            )));
        }
        if self.num_threads == Some(0) {
            return Err(VisitError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
