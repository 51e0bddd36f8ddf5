//! Domain types shared across the workspace.
//!
//! Records are loaded once at startup and treated as read-only for the life
//! of the process; searches never mutate them.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Valid latitude is [-90, 90] and longitude [-180, 180]; range validation
/// happens at the data-loading boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and within the valid
    /// degree ranges.
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The resolved location for a postal code: the search center plus whatever
/// locality metadata the resolution tier could supply.
///
/// Produced fresh per resolve call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalLocation {
    /// Exactly five digits after normalization.
    pub postal_code: String,
    pub point: GeoPoint,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// One health center facility as supplied by the record source.
///
/// The three service-text fields reflect successive enrichment stages of the
/// upstream pipeline: `service_types` is the scraped original,
/// `enriched_service_types` the AI pass, and `curated_service_types` the
/// manual review pass. Consumers pick one via
/// `carefind_search::preferred_service_text` rather than chaining fallbacks
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCenterRecord {
    pub name: String,
    pub street_address_1: String,
    pub street_address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub phone: String,
    pub website: Option<String>,
    /// Absent for records the upstream pipeline could not geocode. Such
    /// records are excluded from radius searches but still appear in the
    /// unfiltered list view.
    pub coordinates: Option<GeoPoint>,
    pub service_types: Option<String>,
    pub enriched_service_types: Option<String>,
    pub curated_service_types: Option<String>,
}

/// A record paired with its distance from one search center.
///
/// Only meaningful within the search invocation that produced it — the same
/// record participates in many searches at different distances, so the
/// distance is never cached on the record itself.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub record: &'a HealthCenterRecord,
    pub distance_miles: f64,
}
