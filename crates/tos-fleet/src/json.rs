//! JSON loaders for telemetry query response bodies.
//!
//! The fleet API answers with nested group documents.  Both the bare
//! document and the `{"data": ...}` envelope are accepted.
//!
//! Trips:
//!
//! ```json
//! {"group": {"devices": [
//!   {"name": "truck-7",
//!    "vehicleActivityReport": {"tripEntries": [
//!      {"driver": {"name": "Ana"},
//!       "start": {"time": 1000, "lat": 37.1, "lng": -122.1, "address": {"name": "..."}},
//!       "end":   {"time": 90000, "lat": 37.0, "lng": -122.0}}
//!    ]}}
//! ]}}
//! ```
//!
//! Sites:
//!
//! ```json
//! {"group": {"addresses": [
//!   {"name": "Depot", "latitude": 37.0, "longitude": -122.0, "radius": 500}
//! ]}}
//! ```
//!
//! A `null` driver becomes an empty driver name; a missing or `null`
//! activity report becomes a vehicle with no trips.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use tos_core::GeoPoint;

use crate::loader::warn_unordered;
use crate::model::{Site, TripEntry, TripSegment, Vehicle};
use crate::FleetResult;

// ── Response shapes ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

#[derive(Deserialize)]
struct GroupDoc<G> {
    group: G,
}

#[derive(Deserialize)]
struct DeviceGroup {
    #[serde(default)]
    devices: Vec<DeviceDoc>,
}

#[derive(Deserialize)]
struct DeviceDoc {
    name: String,
    #[serde(rename = "vehicleActivityReport", default)]
    activity: Option<ActivityDoc>,
}

#[derive(Deserialize)]
struct ActivityDoc {
    #[serde(rename = "tripEntries", default)]
    trip_entries: Vec<TripDoc>,
}

#[derive(Deserialize)]
struct TripDoc {
    #[serde(default)]
    driver: Option<NamedDoc>,
    start:  SegmentDoc,
    end:    SegmentDoc,
}

#[derive(Deserialize)]
struct NamedDoc {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct SegmentDoc {
    time: i64,
    lat:  f32,
    lng:  f32,
}

#[derive(Deserialize)]
struct AddressGroup {
    #[serde(default)]
    addresses: Vec<AddressDoc>,
}

#[derive(Deserialize)]
struct AddressDoc {
    name:      String,
    latitude:  f32,
    longitude: f32,
    radius:    f32,
}

impl From<SegmentDoc> for TripSegment {
    fn from(s: SegmentDoc) -> Self {
        TripSegment::new(s.lat, s.lng, s.time)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-vehicle trip logs from a telemetry response file.
pub fn load_trips_json(path: &Path) -> FleetResult<Vec<Vehicle>> {
    load_trips_json_reader(std::fs::File::open(path)?)
}

/// Like [`load_trips_json`] but accepts any `Read` source.
pub fn load_trips_json_reader<R: Read>(reader: R) -> FleetResult<Vec<Vehicle>> {
    let doc: GroupDoc<DeviceGroup> = read_envelope(reader)?;
    let vehicles: Vec<Vehicle> = doc
        .group
        .devices
        .into_iter()
        .map(|device| {
            let trips = device
                .activity
                .map(|a| a.trip_entries)
                .unwrap_or_default()
                .into_iter()
                .map(|t| {
                    let driver = t.driver.map(|d| d.name).unwrap_or_default();
                    TripEntry::new(driver, t.start.into(), t.end.into())
                })
                .collect();
            Vehicle::new(device.name, trips)
        })
        .collect();

    warn_unordered(&vehicles);
    Ok(vehicles)
}

/// Load the site directory from a site query response file.
pub fn load_sites_json(path: &Path) -> FleetResult<Vec<Site>> {
    load_sites_json_reader(std::fs::File::open(path)?)
}

/// Like [`load_sites_json`] but accepts any `Read` source.
pub fn load_sites_json_reader<R: Read>(reader: R) -> FleetResult<Vec<Site>> {
    let doc: GroupDoc<AddressGroup> = read_envelope(reader)?;
    Ok(doc
        .group
        .addresses
        .into_iter()
        .map(|a| Site::new(a.name, GeoPoint::new(a.latitude, a.longitude), a.radius))
        .collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_envelope<T: DeserializeOwned, R: Read>(reader: R) -> FleetResult<T> {
    let envelope: Envelope<T> = serde_json::from_reader(reader)?;
    Ok(envelope.into_inner())
}
