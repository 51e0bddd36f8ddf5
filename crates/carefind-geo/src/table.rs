//! Offline postal code tables for the fallback resolution tiers.
//!
//! The dataset concentrates in Massachusetts, so the static table carries
//! approximate centroids for the postal codes that actually appear in it,
//! and the prefix table degrades anything else inside the state to a
//! city-level centroid instead of failing outright.

use carefind_core::{GeoPoint, PostalLocation};

/// Region code attached to every static-table and prefix-tier result.
const REGION: &str = "MA";

struct StaticPostalEntry {
    postal_code: &'static str,
    latitude: f64,
    longitude: f64,
    city: &'static str,
}

/// Approximate centroids for postal codes present in the health center
/// dataset. Tier 2 of the resolver: guarantees deterministic resolution for
/// this set even when the remote geocoder is unreachable.
const STATIC_POSTAL_TABLE: &[StaticPostalEntry] = &[
    StaticPostalEntry {
        postal_code: "01040",
        latitude: 42.2043,
        longitude: -72.6162,
        city: "Holyoke",
    },
    StaticPostalEntry {
        postal_code: "01103",
        latitude: 42.1015,
        longitude: -72.5898,
        city: "Springfield",
    },
    StaticPostalEntry {
        postal_code: "01201",
        latitude: 42.4501,
        longitude: -73.2454,
        city: "Pittsfield",
    },
    StaticPostalEntry {
        postal_code: "01605",
        latitude: 42.2917,
        longitude: -71.7876,
        city: "Worcester",
    },
    StaticPostalEntry {
        postal_code: "01701",
        latitude: 42.3193,
        longitude: -71.4357,
        city: "Framingham",
    },
    StaticPostalEntry {
        postal_code: "01840",
        latitude: 42.7070,
        longitude: -71.1631,
        city: "Lawrence",
    },
    StaticPostalEntry {
        postal_code: "01852",
        latitude: 42.6334,
        longitude: -71.3162,
        city: "Lowell",
    },
    StaticPostalEntry {
        postal_code: "01901",
        latitude: 42.4610,
        longitude: -70.9457,
        city: "Lynn",
    },
    StaticPostalEntry {
        postal_code: "02108",
        latitude: 42.3588,
        longitude: -71.0644,
        city: "Boston",
    },
    StaticPostalEntry {
        postal_code: "02118",
        latitude: 42.3388,
        longitude: -71.0726,
        city: "Boston",
    },
    StaticPostalEntry {
        postal_code: "02119",
        latitude: 42.3241,
        longitude: -71.0846,
        city: "Roxbury",
    },
    StaticPostalEntry {
        postal_code: "02121",
        latitude: 42.3066,
        longitude: -71.0811,
        city: "Dorchester",
    },
    StaticPostalEntry {
        postal_code: "02128",
        latitude: 42.3702,
        longitude: -71.0270,
        city: "East Boston",
    },
    StaticPostalEntry {
        postal_code: "02130",
        latitude: 42.3098,
        longitude: -71.1144,
        city: "Jamaica Plain",
    },
    StaticPostalEntry {
        postal_code: "02138",
        latitude: 42.3770,
        longitude: -71.1256,
        city: "Cambridge",
    },
    StaticPostalEntry {
        postal_code: "02139",
        latitude: 42.3647,
        longitude: -71.1042,
        city: "Cambridge",
    },
    StaticPostalEntry {
        postal_code: "02143",
        latitude: 42.3876,
        longitude: -71.0995,
        city: "Somerville",
    },
    StaticPostalEntry {
        postal_code: "02150",
        latitude: 42.3970,
        longitude: -71.0323,
        city: "Chelsea",
    },
    StaticPostalEntry {
        postal_code: "02169",
        latitude: 42.2529,
        longitude: -71.0023,
        city: "Quincy",
    },
    StaticPostalEntry {
        postal_code: "02301",
        latitude: 42.0834,
        longitude: -71.0184,
        city: "Brockton",
    },
    StaticPostalEntry {
        postal_code: "02601",
        latitude: 41.6525,
        longitude: -70.2881,
        city: "Hyannis",
    },
    StaticPostalEntry {
        postal_code: "02720",
        latitude: 41.7186,
        longitude: -71.1330,
        city: "Fall River",
    },
    StaticPostalEntry {
        postal_code: "02740",
        latitude: 41.6362,
        longitude: -70.9342,
        city: "New Bedford",
    },
];

struct PrefixEntry {
    prefix: &'static str,
    latitude: f64,
    longitude: f64,
    label: &'static str,
}

/// City-level centroids keyed by the first three postal digits. Tier 3 of
/// the resolver: coarse on purpose, so an in-state postal code outside the
/// static table degrades to "wrong but plausible" rather than a hard miss.
const PREFIX_TABLE: &[PrefixEntry] = &[
    PrefixEntry {
        prefix: "010",
        latitude: 42.1015,
        longitude: -72.5898,
        label: "Springfield",
    },
    PrefixEntry {
        prefix: "011",
        latitude: 42.1015,
        longitude: -72.5898,
        label: "Springfield",
    },
    PrefixEntry {
        prefix: "012",
        latitude: 42.4501,
        longitude: -73.2454,
        label: "Berkshires",
    },
    PrefixEntry {
        prefix: "013",
        latitude: 42.5876,
        longitude: -72.6003,
        label: "Greenfield",
    },
    PrefixEntry {
        prefix: "014",
        latitude: 42.5834,
        longitude: -71.8023,
        label: "Fitchburg",
    },
    PrefixEntry {
        prefix: "015",
        latitude: 42.2626,
        longitude: -71.8023,
        label: "Worcester",
    },
    PrefixEntry {
        prefix: "016",
        latitude: 42.2626,
        longitude: -71.8023,
        label: "Worcester",
    },
    PrefixEntry {
        prefix: "017",
        latitude: 42.2793,
        longitude: -71.4162,
        label: "MetroWest",
    },
    PrefixEntry {
        prefix: "018",
        latitude: 42.4870,
        longitude: -71.1550,
        label: "Merrimack Valley",
    },
    PrefixEntry {
        prefix: "019",
        latitude: 42.4668,
        longitude: -70.9495,
        label: "North Shore",
    },
    PrefixEntry {
        prefix: "020",
        latitude: 42.1790,
        longitude: -70.9000,
        label: "South Shore",
    },
    PrefixEntry {
        prefix: "021",
        latitude: 42.3601,
        longitude: -71.0589,
        label: "Greater Boston",
    },
    PrefixEntry {
        prefix: "022",
        latitude: 42.3601,
        longitude: -71.0589,
        label: "Greater Boston",
    },
    PrefixEntry {
        prefix: "023",
        latitude: 42.0834,
        longitude: -71.0184,
        label: "Brockton",
    },
    PrefixEntry {
        prefix: "024",
        latitude: 42.4154,
        longitude: -71.1565,
        label: "Middlesex",
    },
    PrefixEntry {
        prefix: "025",
        latitude: 41.7454,
        longitude: -70.6181,
        label: "Upper Cape",
    },
    PrefixEntry {
        prefix: "026",
        latitude: 41.6525,
        longitude: -70.2881,
        label: "Cape Cod",
    },
    PrefixEntry {
        prefix: "027",
        latitude: 41.6770,
        longitude: -71.0330,
        label: "South Coast",
    },
];

/// Looks up a normalized 5-digit postal code in the static table.
#[must_use]
pub fn lookup_static(postal_code: &str) -> Option<PostalLocation> {
    STATIC_POSTAL_TABLE
        .iter()
        .find(|entry| entry.postal_code == postal_code)
        .map(|entry| PostalLocation {
            postal_code: postal_code.to_string(),
            point: GeoPoint::new(entry.latitude, entry.longitude),
            city: Some(entry.city.to_string()),
            region: Some(REGION.to_string()),
        })
}

/// Matches the first three digits of a normalized postal code against the
/// regional prefix table. The locality label is generic ("<Region> area")
/// because the centroid is only city-level precise.
#[must_use]
pub fn lookup_prefix(postal_code: &str) -> Option<PostalLocation> {
    let prefix = postal_code.get(..3)?;
    PREFIX_TABLE
        .iter()
        .find(|entry| entry.prefix == prefix)
        .map(|entry| PostalLocation {
            postal_code: postal_code.to_string(),
            point: GeoPoint::new(entry.latitude, entry.longitude),
            city: Some(format!("{} area", entry.label)),
            region: Some(REGION.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_contains_cambridge() {
        let loc = lookup_static("02138").expect("02138 must be in the static table");
        assert_eq!(loc.city.as_deref(), Some("Cambridge"));
        assert_eq!(loc.region.as_deref(), Some("MA"));
        assert!((loc.point.latitude - 42.3770).abs() < 0.01);
    }

    #[test]
    fn static_table_coordinates_are_all_in_range() {
        for entry in STATIC_POSTAL_TABLE {
            let point = GeoPoint::new(entry.latitude, entry.longitude);
            assert!(point.in_range(), "bad coordinates for {}", entry.postal_code);
            // Everything in the table is a Massachusetts centroid.
            assert!(
                (41.0..43.0).contains(&entry.latitude)
                    && (-74.0..-69.5).contains(&entry.longitude),
                "{} is outside Massachusetts",
                entry.postal_code
            );
        }
    }

    #[test]
    fn static_miss_returns_none() {
        assert!(lookup_static("99999").is_none());
    }

    #[test]
    fn prefix_lookup_matches_first_three_digits() {
        let loc = lookup_prefix("02155").expect("021 prefix must match");
        assert_eq!(loc.city.as_deref(), Some("Greater Boston area"));
        assert_eq!(loc.postal_code, "02155");
    }

    #[test]
    fn prefix_lookup_misses_out_of_state_prefix() {
        assert!(lookup_prefix("10001").is_none());
    }

    #[test]
    fn every_static_entry_is_covered_by_a_prefix() {
        // Tier 3 must be a strict widening of tier 2's coverage.
        for entry in STATIC_POSTAL_TABLE {
            assert!(
                lookup_prefix(entry.postal_code).is_some(),
                "no prefix entry covers {}",
                entry.postal_code
            );
        }
    }
}
