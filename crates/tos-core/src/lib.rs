//! `tos-core` — foundational types for the time-on-site engine.
//!
//! This crate is a dependency of every other `tos-*` crate.  It has no
//! `tos-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance, degree/radian helpers   |
//! | [`bound`]   | `GpsBound` geofence pre-filter, `BoundError`            |
//! | [`time`]    | `TimeWindow` (epoch milliseconds)                       |
//! | [`error`]   | `TosError`, `TosResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bound;
pub mod error;
pub mod geo;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bound::{BoundError, GpsBound};
pub use error::{TosError, TosResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, deg_to_rad, rad_to_deg};
pub use time::TimeWindow;
