use super::*;

fn record(name: &str, coordinates: Option<GeoPoint>) -> HealthCenterRecord {
    HealthCenterRecord {
        name: name.to_string(),
        street_address_1: "1 Main St".to_string(),
        street_address_2: None,
        city: "Boston".to_string(),
        state: "MA".to_string(),
        zipcode: "02118".to_string(),
        phone: "617-555-0100".to_string(),
        website: None,
        coordinates,
        service_types: None,
        enriched_service_types: None,
        curated_service_types: None,
    }
}

fn record_with_services(name: &str, point: GeoPoint, services: &str) -> HealthCenterRecord {
    let mut r = record(name, Some(point));
    r.service_types = Some(services.to_string());
    r
}

const CENTER: GeoPoint = GeoPoint::new(42.0, -71.0);

/// Roughly two miles north of `CENTER` (one degree of latitude ≈ 69 miles).
const TWO_MILES_NORTH: GeoPoint = GeoPoint::new(42.0289, -71.0);

/// Roughly ten miles north of `CENTER`.
const TEN_MILES_NORTH: GeoPoint = GeoPoint::new(42.1446, -71.0);

#[test]
fn zero_radius_is_a_caller_bug() {
    let records = vec![record("A", Some(CENTER))];
    let err = search(&records, CENTER, 0.0, &[]).unwrap_err();
    assert!(matches!(err, SearchError::NonPositiveRadius { .. }));
}

#[test]
fn negative_and_nan_radius_are_caller_bugs() {
    let records = vec![record("A", Some(CENTER))];
    assert!(search(&records, CENTER, -3.0, &[]).is_err());
    assert!(search(&records, CENTER, f64::NAN, &[]).is_err());
}

#[test]
fn empty_record_set_yields_empty_results() {
    let results = search(&[], CENTER, 10.0, &[]).expect("empty input is not an error");
    assert!(results.is_empty());
}

#[test]
fn records_without_coordinates_are_silently_excluded() {
    let records = vec![
        record("geocoded", Some(CENTER)),
        record("not geocoded", None),
    ];
    let results = search(&records, CENTER, 10.0, &[]).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.name, "geocoded");
}

#[test]
fn ungeocoded_record_is_excluded_even_with_capability_filter() {
    let mut r = record("not geocoded", None);
    r.service_types = Some("Dental".to_string());
    let records = [r];
    let results =
        search(&records, CENTER, 10.0, &[Capability::DentalCare]).expect("search");
    assert!(results.is_empty());
}

#[test]
fn tiny_radius_keeps_only_the_record_at_the_center() {
    let records = vec![
        record("at center", Some(CENTER)),
        record("two miles out", Some(TWO_MILES_NORTH)),
    ];
    let results = search(&records, CENTER, 0.001, &[]).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.name, "at center");
    assert!(results[0].distance_miles.abs() < 1e-9);
}

#[test]
fn radius_comparison_is_inclusive() {
    let away = GeoPoint::new(42.01, -71.0);
    let exact_distance = carefind_geo::distance_miles(CENTER, away);
    let records = vec![record("on the boundary", Some(away))];
    let results = search(&records, CENTER, exact_distance, &[]).expect("search");
    assert_eq!(results.len(), 1, "a record exactly at the radius is kept");
}

#[test]
fn results_are_sorted_ascending_by_distance() {
    let records = vec![
        record("far", Some(TEN_MILES_NORTH)),
        record("near", Some(TWO_MILES_NORTH)),
        record("at center", Some(CENTER)),
    ];
    let results = search(&records, CENTER, 50.0, &[]).expect("search");
    let names: Vec<&str> = results.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, ["at center", "near", "far"]);
}

#[test]
fn widening_the_radius_appends_farther_results() {
    // A at the center, B at ~2 miles, C at ~10 miles.
    let records = vec![
        record("A", Some(CENTER)),
        record("B", Some(TWO_MILES_NORTH)),
        record("C", Some(TEN_MILES_NORTH)),
    ];

    let within_five = search(&records, CENTER, 5.0, &[]).expect("search");
    let names: Vec<&str> = within_five.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(within_five[0].distance_miles.abs() < 1e-9);
    assert!((within_five[1].distance_miles - 2.0).abs() < 0.1);

    let within_fifteen = search(&records, CENTER, 15.0, &[]).expect("search");
    let names: Vec<&str> = within_fifteen
        .iter()
        .map(|r| r.record.name.as_str())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!((within_fifteen[2].distance_miles - 10.0).abs() < 0.2);
}

#[test]
fn equal_distance_records_keep_input_order() {
    let records = vec![
        record("first in file", Some(TWO_MILES_NORTH)),
        record("second in file", Some(TWO_MILES_NORTH)),
        record("third in file", Some(TWO_MILES_NORTH)),
    ];
    let results = search(&records, CENTER, 5.0, &[]).expect("search");
    let names: Vec<&str> = results.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, ["first in file", "second in file", "third in file"]);
}

#[test]
fn same_inputs_yield_identical_ordering_across_runs() {
    let records = vec![
        record("tie one", Some(TWO_MILES_NORTH)),
        record("tie two", Some(TWO_MILES_NORTH)),
        record("closer", Some(CENTER)),
    ];
    let first: Vec<String> = search(&records, CENTER, 5.0, &[])
        .expect("search")
        .iter()
        .map(|r| r.record.name.clone())
        .collect();
    let second: Vec<String> = search(&records, CENTER, 5.0, &[])
        .expect("search")
        .iter()
        .map(|r| r.record.name.clone())
        .collect();
    assert_eq!(first, second);
    assert_eq!(first, ["closer", "tie one", "tie two"]);
}

#[test]
fn capability_filter_keeps_matching_records() {
    let records = vec![
        record_with_services("dental place", CENTER, "Dental, Primary Care"),
        record_with_services("vision place", TWO_MILES_NORTH, "Optometry"),
        record_with_services("pharmacy only", TWO_MILES_NORTH, "Pharmacy"),
    ];
    let results = search(&records, CENTER, 10.0, &[Capability::DentalCare]).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.name, "dental place");
}

#[test]
fn capability_filter_is_an_or_across_selections() {
    // Requesting dental OR vision keeps a record that offers either one.
    let records = vec![
        record_with_services("dental only", CENTER, "Dental"),
        record_with_services("vision only", TWO_MILES_NORTH, "Eye Care"),
        record_with_services("neither", TWO_MILES_NORTH, "Podiatry"),
    ];
    let results = search(
        &records,
        CENTER,
        10.0,
        &[Capability::DentalCare, Capability::Vision],
    )
    .expect("search");
    let names: Vec<&str> = results.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, ["dental only", "vision only"]);
}

#[test]
fn record_with_no_service_text_is_exempt_from_capability_filter() {
    // Deliberate policy: missing service data is not "does not offer it".
    // A record with no text under any enrichment stage passes every filter.
    let records = vec![
        record("no service data", Some(CENTER)),
        record_with_services("podiatry only", TWO_MILES_NORTH, "Podiatry"),
    ];
    let results = search(&records, CENTER, 10.0, &[Capability::DentalCare]).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.name, "no service data");
}

#[test]
fn whitespace_only_service_text_counts_as_absent_for_the_exemption() {
    let mut r = record("blank text", Some(CENTER));
    r.service_types = Some("   ".to_string());
    let records = [r];
    let results = search(&records, CENTER, 10.0, &[Capability::Vision]).expect("search");
    assert_eq!(results.len(), 1, "blank text is treated as missing data");
}

#[test]
fn curated_text_outranks_enriched_and_original_in_the_filter() {
    // The original text says dental; the curated correction says vision only.
    // Classification must follow the curated value.
    let mut r = record("corrected", Some(CENTER));
    r.service_types = Some("Dental".to_string());
    r.curated_service_types = Some("Eye Care".to_string());

    let records = vec![r];
    assert!(search(&records, CENTER, 10.0, &[Capability::DentalCare])
        .expect("search")
        .is_empty());
    assert_eq!(
        search(&records, CENTER, 10.0, &[Capability::Vision])
            .expect("search")
            .len(),
        1
    );
}

#[test]
fn empty_capability_set_applies_no_service_filter() {
    let records = vec![record_with_services("podiatry only", CENTER, "Podiatry")];
    let results = search(&records, CENTER, 10.0, &[]).expect("search");
    assert_eq!(results.len(), 1);
}
