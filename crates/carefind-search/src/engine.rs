//! The search and rank pipeline.
//!
//! One pass over the in-memory record set: drop records without coordinates,
//! compute the great-circle distance to each survivor, keep those inside the
//! radius, apply the capability filter, and sort ascending by distance with
//! input order preserved on ties. Stateless — concurrent searches over the
//! same record slice never interfere.

use std::cmp::Ordering;

use thiserror::Error;

use carefind_core::{Capability, GeoPoint, HealthCenterRecord, SearchResult};
use carefind_geo::distance_miles;

use crate::matcher::{classify, preferred_service_text};

/// Two distances closer than this are a tie and keep their input order.
const DISTANCE_TIE_EPSILON: f64 = 1e-9;

/// Input-contract violations. These indicate a caller bug, not a runtime
/// condition, and fail fast.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search radius must be a positive number of miles, got {radius_miles}")]
    NonPositiveRadius { radius_miles: f64 },
}

/// Finds every record within `radius_miles` of `center`, ranked nearest
/// first.
///
/// Records without coordinates are silently excluded — absent geocoding is
/// expected data, not an error. When `required` is non-empty, a record is
/// kept if its classified flags match *any* requested capability (logical
/// OR); records with no service text under any enrichment stage are exempt
/// from the filter entirely, since missing data is not evidence a service is
/// unavailable.
///
/// The radius comparison is inclusive, result order is deterministic, and
/// nothing is truncated — pagination is the caller's concern. An empty
/// record set yields an empty result list.
///
/// # Errors
///
/// Returns [`SearchError::NonPositiveRadius`] when `radius_miles` is zero,
/// negative, or NaN.
pub fn search<'a>(
    records: &'a [HealthCenterRecord],
    center: GeoPoint,
    radius_miles: f64,
    required: &[Capability],
) -> Result<Vec<SearchResult<'a>>, SearchError> {
    if radius_miles.is_nan() || radius_miles <= 0.0 {
        return Err(SearchError::NonPositiveRadius { radius_miles });
    }

    let mut results: Vec<SearchResult<'a>> = records
        .iter()
        .filter_map(|record| {
            let coordinates = record.coordinates?;
            let distance = distance_miles(center, coordinates);
            (distance <= radius_miles).then_some(SearchResult {
                record,
                distance_miles: distance,
            })
        })
        .filter(|result| required.is_empty() || passes_capability_filter(result.record, required))
        .collect();

    // Stable sort, no secondary key: equal-distance records keep the order
    // they had in the input slice.
    results.sort_by(|a, b| {
        if (a.distance_miles - b.distance_miles).abs() < DISTANCE_TIE_EPSILON {
            Ordering::Equal
        } else {
            a.distance_miles.total_cmp(&b.distance_miles)
        }
    });

    tracing::debug!(
        total = records.len(),
        matched = results.len(),
        radius_miles,
        "search complete"
    );

    Ok(results)
}

/// OR-match across the requested capabilities, with the missing-data
/// exemption: a record with no service text under any enrichment stage
/// passes regardless of the filter.
fn passes_capability_filter(record: &HealthCenterRecord, required: &[Capability]) -> bool {
    let Some(text) = preferred_service_text(
        record.curated_service_types.as_deref(),
        record.enriched_service_types.as_deref(),
        record.service_types.as_deref(),
    ) else {
        return true;
    };

    classify(Some(text)).matches_any(required)
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
