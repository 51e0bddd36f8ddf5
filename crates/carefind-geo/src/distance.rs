//! Great-circle distance between two points.
//!
//! Haversine over a spherical Earth. Accurate to well under 0.5% for the
//! distances this system cares about (tens of miles), which is far inside the
//! tolerance of "centers near a postal code".

use carefind_core::GeoPoint;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

const KM_PER_MILE: f64 = 1.609_344;

/// Great-circle distance between `a` and `b` in miles.
///
/// Symmetric, and zero (within floating-point tolerance) when the points
/// coincide. Inputs are not range-checked: out-of-range coordinates produce a
/// numerically nonsensical but finite, non-panicking result. Range validation
/// belongs to the record-loading boundary.
#[must_use]
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp guards against h creeping over 1.0 from rounding on antipodal
    // points, which would make sqrt feed asin a value out of domain.
    2.0 * EARTH_RADIUS_MILES * h.min(1.0).sqrt().asin()
}

/// Great-circle distance between `a` and `b` in kilometers.
///
/// A pure scalar conversion of [`distance_miles`] — never a separate
/// computation.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    distance_miles(a, b) * KM_PER_MILE
}
