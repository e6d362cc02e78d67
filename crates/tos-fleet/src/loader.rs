//! CSV loaders for the site directory and the trip table.
//!
//! # Site CSV
//!
//! ```csv
//! name,latitude,longitude,radius
//! Depot North,37.733795,-122.446747,500
//! Yard 2,37.0,-122.0,250
//! ```
//!
//! # Trip CSV
//!
//! One row per trip.  Rows for a vehicle must appear in ascending time order;
//! vehicles are emitted in order of first appearance.
//!
//! ```csv
//! vehicle,driver,start_time_ms,start_lat,start_lng,end_time_ms,end_lat,end_lng
//! truck-7,Ana,1000,37.1,-122.1,90000,37.0,-122.0
//! truck-7,Ana,150000,37.0,-122.0,180000,37.2,-122.3
//! van-3,,5000,37.5,-122.5,60000,37.6,-122.6
//! ```
//!
//! An empty `driver` field means no driver was assigned.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tos_core::GeoPoint;

use crate::model::{Site, TripEntry, TripSegment, Vehicle};
use crate::{FleetError, FleetResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SiteRecord {
    name:      String,
    latitude:  f32,
    longitude: f32,
    radius:    f32,
}

#[derive(Deserialize)]
struct TripRecord {
    vehicle:       String,
    #[serde(default)]
    driver:        String,
    start_time_ms: i64,
    start_lat:     f32,
    start_lng:     f32,
    end_time_ms:   i64,
    end_lat:       f32,
    end_lng:       f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the site directory from a CSV file.
pub fn load_sites_csv(path: &Path) -> FleetResult<Vec<Site>> {
    let file = std::fs::File::open(path)?;
    load_sites_reader(file)
}

/// Like [`load_sites_csv`] but accepts any `Read` source.
pub fn load_sites_reader<R: Read>(reader: R) -> FleetResult<Vec<Site>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sites = Vec::new();
    for result in csv_reader.deserialize::<SiteRecord>() {
        let row = result?;
        sites.push(Site::new(row.name, GeoPoint::new(row.latitude, row.longitude), row.radius));
    }
    Ok(sites)
}

/// Load per-vehicle trip logs from a CSV file.
pub fn load_trips_csv(path: &Path) -> FleetResult<Vec<Vehicle>> {
    let file = std::fs::File::open(path)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_trips_reader<R: Read>(reader: R) -> FleetResult<Vec<Vehicle>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<TripRecord>() {
        let row = result?;
        let trip = TripEntry::new(
            row.driver,
            TripSegment::new(row.start_lat, row.start_lng, row.start_time_ms),
            TripSegment::new(row.end_lat, row.end_lng, row.end_time_ms),
        );
        let slot = match index.get(&row.vehicle) {
            Some(&i) => i,
            None => {
                index.insert(row.vehicle.clone(), vehicles.len());
                vehicles.push(Vehicle::new(row.vehicle, Vec::new()));
                vehicles.len() - 1
            }
        };
        vehicles[slot].trips.push(trip);
    }

    warn_unordered(&vehicles);
    Ok(vehicles)
}

/// Log vehicles whose trips overlap in time.  They are kept as-is.
pub(crate) fn warn_unordered(vehicles: &[Vehicle]) {
    for v in vehicles.iter().filter(|v| !v.is_time_ordered()) {
        log::warn!("trips for vehicle {:?} are not in ascending time order", v.name);
    }
}

// ── Format dispatch ───────────────────────────────────────────────────────────

/// Load sites from a `.csv` or `.json` file, chosen by extension.
pub fn load_sites(path: &Path) -> FleetResult<Vec<Site>> {
    match extension(path)?.as_str() {
        "csv" => load_sites_csv(path),
        _ => crate::json::load_sites_json(path),
    }
}

/// Load vehicles from a `.csv` or `.json` file, chosen by extension.
pub fn load_trips(path: &Path) -> FleetResult<Vec<Vehicle>> {
    match extension(path)?.as_str() {
        "csv" => load_trips_csv(path),
        _ => crate::json::load_trips_json(path),
    }
}

fn extension(path: &Path) -> FleetResult<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if matches!(ext.as_str(), "csv" | "json") {
        Ok(ext)
    } else {
        Err(FleetError::Parse(format!(
            "unsupported file type {ext:?} for {}: expected .csv or .json",
            path.display()
        )))
    }
}
