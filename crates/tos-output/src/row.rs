//! Flat row types written by the CSV backend.

use tos_visit::{SiteReport, VisitLine};

/// Totals for one site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSummaryRow {
    pub site:             String,
    pub unique_vehicles:  usize,
    pub visits:           usize,
    pub total_time_secs:  i64,
    /// `None` when the site had no visits.
    pub avg_visit_secs:   Option<i64>,
}

impl From<&SiteReport> for SiteSummaryRow {
    fn from(r: &SiteReport) -> Self {
        Self {
            site:            r.site_name.clone(),
            unique_vehicles: r.total_unique_vehicles,
            visits:          r.total_visits,
            total_time_secs: r.total_time_secs,
            avg_visit_secs:  r.average_visit_secs(),
        }
    }
}

/// One visit, tagged with its site.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRow {
    pub site:          String,
    pub vehicle:       String,
    pub driver:        String,
    pub arrival_ms:    i64,
    pub departure_ms:  i64,
    pub duration_secs: i64,
    pub lat:           f32,
    pub lon:           f32,
}

impl VisitRow {
    pub fn new(site: &str, line: &VisitLine) -> Self {
        Self {
            site:          site.to_owned(),
            vehicle:       line.vehicle.clone(),
            driver:        line.driver.clone(),
            arrival_ms:    line.arrival_ms,
            departure_ms:  line.departure_ms,
            duration_secs: line.duration_secs(),
            lat:           line.point.lat,
            lon:           line.point.lon,
        }
    }
}
