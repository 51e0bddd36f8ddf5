use super::*;

#[test]
fn normalize_accepts_plain_five_digits() {
    assert_eq!(normalize_postal_code("02138").unwrap(), "02138");
}

#[test]
fn normalize_strips_spaces_and_hyphens() {
    assert_eq!(normalize_postal_code(" 021 38 ").unwrap(), "02138");
    assert_eq!(normalize_postal_code("021-38").unwrap(), "02138");
}

#[test]
fn normalize_strips_trailing_spreadsheet_artifact() {
    // "02138.0" is what a numeric spreadsheet column does to a postal code.
    assert_eq!(normalize_postal_code("02138.0").unwrap(), "02138");
}

#[test]
fn normalize_rejects_too_few_digits() {
    let err = normalize_postal_code("2138").unwrap_err();
    assert!(matches!(err, ResolveError::InvalidFormat { ref input } if input == "2138"));
}

#[test]
fn normalize_rejects_too_many_digits() {
    assert!(matches!(
        normalize_postal_code("021382"),
        Err(ResolveError::InvalidFormat { .. })
    ));
}

#[test]
fn normalize_rejects_zip_plus_four() {
    // ZIP+4 is nine digits after stripping the hyphen; we require exactly five.
    assert!(matches!(
        normalize_postal_code("02138-1234"),
        Err(ResolveError::InvalidFormat { .. })
    ));
}

#[test]
fn normalize_rejects_empty_and_alpha_input() {
    assert!(matches!(
        normalize_postal_code(""),
        Err(ResolveError::InvalidFormat { .. })
    ));
    assert!(matches!(
        normalize_postal_code("cambridge"),
        Err(ResolveError::InvalidFormat { .. })
    ));
}
