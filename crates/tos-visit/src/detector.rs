//! Single-site visit detection over the whole fleet.
//!
//! Telemetry only records where trips start and end, so presence at a site
//! is inferred from gaps between trips:
//!
//! ```text
//!   trip i ends inside the geofence at t_end
//!   trip i+1 starts at t_next            (or the window end if i is last)
//!   ⇒ visit [t_end, t_next]
//! ```
//!
//! A vehicle whose *first* trip starts inside the geofence is assumed to have
//! been there since the window opened, giving a boundary visit
//! `[window.start, trip₀.start]`.
//!
//! # Filter order
//!
//! For every trip end, the cheap checks run first and the haversine test
//! only runs on survivors:
//!
//! 1. end point inside the site's [`GpsBound`] (inclusive),
//! 2. departure strictly after arrival,
//! 3. arrival at or after the window start,
//! 4. great-circle distance ≤ radius (inclusive).
//!
//! The boundary case skips the rectangle and goes straight to the exact
//! distance test: it runs once per vehicle, not once per trip.

use tos_core::{BoundError, GpsBound, TimeWindow};
use tos_fleet::{Site, Vehicle};

use crate::{SiteReport, VisitLine};

/// Detects visits to one site.  Cheap to build; holds only borrowed input
/// and the precomputed bounding rectangle.
#[derive(Clone, Debug)]
pub struct VisitDetector<'a> {
    site:   &'a Site,
    bound:  GpsBound,
    window: TimeWindow,
}

impl<'a> VisitDetector<'a> {
    /// Precompute the bounding rectangle for `site`.
    ///
    /// Fails with [`BoundError::PoleOverlap`] when the rectangle would cross
    /// a pole; the caller should skip the site.
    pub fn new(site: &'a Site, window: TimeWindow, multiplier: f32) -> Result<Self, BoundError> {
        let bound = site.bound(multiplier)?;
        Ok(Self { site, bound, window })
    }

    #[inline]
    pub fn bound(&self) -> &GpsBound {
        &self.bound
    }

    /// Scan every vehicle and build this site's report.
    ///
    /// The report may be empty; callers decide whether to keep it.
    pub fn detect(&self, vehicles: &[Vehicle]) -> SiteReport {
        let mut report = SiteReport::new(self.site.name.clone());
        for vehicle in vehicles {
            if self.scan_vehicle(vehicle, &mut report) {
                report.total_unique_vehicles += 1;
            }
        }
        report
    }

    /// Append this vehicle's visits to `report`.  Returns `true` if any.
    fn scan_vehicle(&self, vehicle: &Vehicle, report: &mut SiteReport) -> bool {
        let trips = vehicle.trips.as_slice();
        let mut visited = false;

        for (i, trip) in trips.iter().enumerate() {
            if i == 0 && self.site.contains(trip.start.point) {
                let arrival_ms = self.window.start_ms();
                let departure_ms = trip.start.time_ms;
                if departure_ms >= arrival_ms {
                    report.record(VisitLine {
                        driver: trip.driver.clone(),
                        vehicle: vehicle.name.clone(),
                        arrival_ms,
                        departure_ms,
                        point: trip.start.point,
                    });
                    visited = true;
                }
            }

            let arrival_ms = trip.end.time_ms;
            let departure_ms = trips
                .get(i + 1)
                .map_or(self.window.end_ms(), |next| next.start.time_ms);

            if self.bound.contains(trip.end.point)
                && departure_ms > arrival_ms
                && arrival_ms >= self.window.start_ms()
                && self.site.contains(trip.end.point)
            {
                report.record(VisitLine {
                    driver: trip.driver.clone(),
                    vehicle: vehicle.name.clone(),
                    arrival_ms,
                    departure_ms,
                    point: trip.end.point,
                });
                visited = true;
            }
        }

        visited
    }
}

/// Build the report for one site, or the bound error that disqualifies it.
pub fn detect_site_visits(
    site:       &Site,
    vehicles:   &[Vehicle],
    window:     TimeWindow,
    multiplier: f32,
) -> Result<SiteReport, BoundError> {
    Ok(VisitDetector::new(site, window, multiplier)?.detect(vehicles))
}
