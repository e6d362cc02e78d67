//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` stores single-precision latitude/longitude, which is what the
//! telemetry feed delivers.  All trigonometry runs in `f64` and only the final
//! distance is narrowed back to `f32`, so results are reproducible against
//! reference distances down to the metre.

/// Mean Earth radius in metres (spherical approximation).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Degrees → radians, widening to `f64` first.
#[inline]
pub fn deg_to_rad(deg: f32) -> f64 {
    f64::from(deg) * std::f64::consts::PI / 180.0
}

/// Radians → degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Total over finite inputs and symmetric in its arguments.  Use
    /// [`GpsBound::contains`][crate::GpsBound::contains] first when testing
    /// many points against one geofence; this is the expensive half.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        let d_lat = deg_to_rad(other.lat - self.lat);
        let d_lon = deg_to_rad(other.lon - self.lon);

        let lat1 = deg_to_rad(self.lat);
        let lat2 = deg_to_rad(other.lat);

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        (EARTH_RADIUS_M * c) as f32
    }

    /// `true` if `other` lies within `radius_m` metres (inclusive).
    #[inline]
    pub fn within_radius(self, other: GeoPoint, radius_m: f32) -> bool {
        self.distance_m(other) <= radius_m
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
