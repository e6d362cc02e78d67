//! Axis-aligned bounding rectangles around circular geofences.
//!
//! A geofence is a centre plus a radius in metres.  Testing a point against
//! it exactly needs a haversine evaluation; testing it against the enclosing
//! rectangle needs four comparisons.  [`GpsBound::around`] builds that
//! rectangle, widened by a caller-supplied multiplier so the cheap test never
//! rejects a point the exact test would accept.
//!
//! # Approximation
//!
//! ```text
//! delta_deg = (multiplier · |radius| / R) · 180/π
//! lat ∈ [lat - delta_deg, lat + delta_deg]
//! lon ∈ [lon - delta_deg, lon + delta_deg]
//! ```
//!
//! The same angular delta is used on both axes.  Near the poles this breaks
//! down, so a latitude bound beyond ±90° is an error rather than a wrong
//! answer.  A longitude bound beyond ±180° is widened to the full
//! `[-180, 180]` belt instead of wrapping across the anti-meridian.

use thiserror::Error;

use crate::geo::{rad_to_deg, GeoPoint, EARTH_RADIUS_M};

/// Failure to build a usable bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundError {
    #[error("bounds around latitude {lat} (±{delta_deg}°) overlap the north or south pole")]
    PoleOverlap { lat: f32, delta_deg: f64 },
}

/// Latitude/longitude rectangle, inclusive on every edge.
///
/// A zero-radius geofence yields a degenerate rectangle equal to its centre.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsBound {
    pub lat_min: f32,
    pub lat_max: f32,
    pub lon_min: f32,
    pub lon_max: f32,
}

impl GpsBound {
    /// The degenerate rectangle covering exactly `p`.
    #[inline]
    pub fn point(p: GeoPoint) -> Self {
        Self { lat_min: p.lat, lat_max: p.lat, lon_min: p.lon, lon_max: p.lon }
    }

    /// Bounding rectangle for a circle of `radius_m` around `center`.
    ///
    /// The sign of `radius_m` is ignored.  `multiplier` should be ≥ 1; it is
    /// applied as given (validation belongs to the caller's configuration).
    pub fn around(center: GeoPoint, radius_m: f32, multiplier: f32) -> Result<Self, BoundError> {
        if radius_m == 0.0 {
            return Ok(Self::point(center));
        }
        let radius = f64::from(radius_m.abs());
        let delta_deg = rad_to_deg(f64::from(multiplier) * radius / EARTH_RADIUS_M);

        let lat = f64::from(center.lat);
        let lat_min = lat - delta_deg;
        let lat_max = lat + delta_deg;
        if lat_max > 90.0 || lat_min < -90.0 {
            return Err(BoundError::PoleOverlap { lat: center.lat, delta_deg });
        }

        let lon = f64::from(center.lon);
        let (lon_min, lon_max) = if lon - delta_deg < -180.0 || lon + delta_deg > 180.0 {
            (-180.0, 180.0)
        } else {
            (lon - delta_deg, lon + delta_deg)
        };

        Ok(Self {
            lat_min: lat_min as f32,
            lat_max: lat_max as f32,
            lon_min: lon_min as f32,
            lon_max: lon_max as f32,
        })
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.lat_min
            && p.lat <= self.lat_max
            && p.lon >= self.lon_min
            && p.lon <= self.lon_max
    }
}
