//! Per-site report types produced by visit detection.

use tos_core::GeoPoint;

/// One inferred stay of a vehicle at a site.
///
/// `departure_ms >= arrival_ms` always holds; candidates that would break it
/// are discarded during detection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitLine {
    pub driver:       String,
    pub vehicle:      String,
    pub arrival_ms:   i64,
    pub departure_ms: i64,
    /// The trip endpoint that placed the vehicle inside the geofence.
    pub point:        GeoPoint,
}

impl VisitLine {
    /// Whole seconds on site (truncated, saturating on extreme timestamps).
    #[inline]
    pub fn duration_secs(&self) -> i64 {
        self.departure_ms.saturating_sub(self.arrival_ms) / 1000
    }
}

/// Visit statistics for one site over one window.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteReport {
    pub site_name:             String,
    /// Vehicles with at least one visit.
    pub total_unique_vehicles: usize,
    pub total_visits:          usize,
    /// Sum of each visit's truncated duration in seconds.
    pub total_time_secs:       i64,
    /// Visits in vehicle order, then trip order.
    pub lines:                 Vec<VisitLine>,
}

impl SiteReport {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self { site_name: site_name.into(), ..Self::default() }
    }

    /// Append a visit and update the visit and time totals.
    pub fn record(&mut self, line: VisitLine) {
        self.total_time_secs = self.total_time_secs.saturating_add(line.duration_secs());
        self.total_visits += 1;
        self.lines.push(line);
    }

    /// `true` when no vehicle visited the site.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_visits == 0
    }

    /// Mean seconds per visit; `None` when there were no visits.
    pub fn average_visit_secs(&self) -> Option<i64> {
        if self.total_visits == 0 {
            None
        } else {
            Some(self.total_time_secs / self.total_visits as i64)
        }
    }
}
