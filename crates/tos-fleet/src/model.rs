//! Decoded input data: geofenced sites and per-vehicle trip logs.
//!
//! Everything here is built once per run and then only read.

use tos_core::{BoundError, GeoPoint, GpsBound};

// ── Site ──────────────────────────────────────────────────────────────────────

/// A named circular geofence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub name:     String,
    pub center:   GeoPoint,
    /// Radius in metres as supplied.  May be negative; see [`Site::radius_m`].
    pub radius_m: f32,
}

impl Site {
    pub fn new(name: impl Into<String>, center: GeoPoint, radius_m: f32) -> Self {
        Self { name: name.into(), center, radius_m }
    }

    /// Effective radius in metres (sign dropped).
    #[inline]
    pub fn radius_m(&self) -> f32 {
        self.radius_m.abs()
    }

    /// Exact geofence test: great-circle distance ≤ radius.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        self.center.within_radius(p, self.radius_m())
    }

    /// Bounding rectangle of this site, widened by `multiplier`.
    pub fn bound(&self, multiplier: f32) -> Result<GpsBound, BoundError> {
        GpsBound::around(self.center, self.radius_m, multiplier)
    }
}

// ── Trips ─────────────────────────────────────────────────────────────────────

/// One endpoint of a trip leg.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSegment {
    pub point:   GeoPoint,
    /// Epoch milliseconds.
    pub time_ms: i64,
}

impl TripSegment {
    #[inline]
    pub fn new(lat: f32, lon: f32, time_ms: i64) -> Self {
        Self { point: GeoPoint::new(lat, lon), time_ms }
    }
}

/// A single trip: where and when the vehicle started and stopped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripEntry {
    /// Empty when the trip has no assigned driver.
    pub driver: String,
    pub start:  TripSegment,
    pub end:    TripSegment,
}

impl TripEntry {
    pub fn new(driver: impl Into<String>, start: TripSegment, end: TripSegment) -> Self {
        Self { driver: driver.into(), start, end }
    }
}

// ── Vehicle / Fleet ───────────────────────────────────────────────────────────

/// A vehicle and its trips in ascending time order.
///
/// Trip order is the caller's responsibility and is never re-sorted: the
/// visit scan infers departures from the *next* trip's start.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub name:  String,
    pub trips: Vec<TripEntry>,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, trips: Vec<TripEntry>) -> Self {
        Self { name: name.into(), trips }
    }

    /// `true` if every trip starts no earlier than the previous one ended.
    pub fn is_time_ordered(&self) -> bool {
        self.trips
            .windows(2)
            .all(|w| w[1].start.time_ms >= w[0].end.time_ms)
    }
}

/// The full decoded input for one report run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    pub sites:    Vec<Site>,
    pub vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(sites: Vec<Site>, vehicles: Vec<Vehicle>) -> Self {
        Self { sites, vehicles }
    }

    /// Total trip entries across all vehicles.
    pub fn trip_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.trips.len()).sum()
    }
}
