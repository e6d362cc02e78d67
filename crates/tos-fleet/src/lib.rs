//! `tos-fleet` — site directory and vehicle trip logs.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`model`]   | `Site`, `TripSegment`, `TripEntry`, `Vehicle`, `Fleet`        |
//! | [`loader`]  | CSV loaders, extension-based `load_sites` / `load_trips`      |
//! | [`json`]    | Telemetry response body loaders                               |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                |
//!
//! Loaders never re-order trips.  A vehicle whose trips are out of time
//! order is logged at `warn` level and passed through unchanged.

pub mod error;
pub mod json;
pub mod loader;
pub mod model;


pub use error::{FleetError, FleetResult};
pub use json::{load_sites_json, load_sites_json_reader, load_trips_json, load_trips_json_reader};
pub use loader::{
    load_sites, load_sites_csv, load_sites_reader, load_trips, load_trips_csv, load_trips_reader,
};
pub use model::{Fleet, Site, TripEntry, TripSegment, Vehicle};
