//! CSV record source.
//!
//! Reads the health center CSV produced by the upstream scraping and
//! enrichment pipeline into [`HealthCenterRecord`]s. This crate is the
//! boundary where text becomes typed data: coordinates are parsed and
//! range-checked here (bad values become "not geocoded", never a crash),
//! and blank optional columns become `None`. Malformed rows are skipped
//! with a warning rather than failing the whole load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use carefind_core::{GeoPoint, HealthCenterRecord};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read record CSV at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// One row of the upstream CSV, column names as the pipeline writes them.
///
/// `types` is the scraped service text, `openai_types` the AI enrichment
/// pass, `resolved_types` the manually curated pass.
#[derive(Debug, Deserialize)]
struct RawRecordRow {
    name: String,
    #[serde(default)]
    street_address_1: Option<String>,
    #[serde(default)]
    street_address_2: Option<String>,
    #[serde(default)]
    city_town: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    zipcode: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    types: Option<String>,
    #[serde(default)]
    openai_types: Option<String>,
    #[serde(default)]
    resolved_types: Option<String>,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
}

impl RawRecordRow {
    fn into_record(self) -> HealthCenterRecord {
        let coordinates = parse_coordinates(
            &self.name,
            self.latitude.as_deref(),
            self.longitude.as_deref(),
        );

        HealthCenterRecord {
            street_address_1: self.street_address_1.unwrap_or_default(),
            street_address_2: non_empty(self.street_address_2),
            city: self.city_town.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            zipcode: non_empty(self.zipcode).unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            website: non_empty(self.website),
            coordinates,
            service_types: non_empty(self.types),
            enriched_service_types: non_empty(self.openai_types),
            curated_service_types: non_empty(self.resolved_types),
            name: self.name,
        }
    }
}

/// Loads records from a CSV file on disk.
///
/// # Errors
///
/// Returns [`DataError::Open`] if the file cannot be opened or its header
/// cannot be read. Individual malformed rows are skipped, not fatal.
pub fn load_records(path: &Path) -> Result<Vec<HealthCenterRecord>, DataError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::Open {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok(collect_records(reader))
}

/// Parses records from any `Read` source. Used by tests and by callers that
/// fetch the CSV from somewhere other than the local filesystem.
pub fn parse_records(input: impl Read) -> Vec<HealthCenterRecord> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    collect_records(reader)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Vec<HealthCenterRecord> {
    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawRecordRow>().enumerate() {
        match result {
            Ok(row) => records.push(row.into_record()),
            Err(e) => {
                tracing::warn!(row = index + 1, error = %e, "skipping malformed CSV row");
            }
        }
    }
    tracing::info!(count = records.len(), "loaded health center records");
    records
}

/// Parses and range-checks a coordinate pair. Anything missing, unparseable,
/// non-finite, or out of range means "not geocoded".
fn parse_coordinates(name: &str, latitude: Option<&str>, longitude: Option<&str>) -> Option<GeoPoint> {
    let lat_raw = latitude.map(str::trim).filter(|s| !s.is_empty())?;
    let lon_raw = longitude.map(str::trim).filter(|s| !s.is_empty())?;

    let (Ok(lat), Ok(lon)) = (lat_raw.parse::<f64>(), lon_raw.parse::<f64>()) else {
        tracing::warn!(name, lat_raw, lon_raw, "unparseable coordinates; treating as not geocoded");
        return None;
    };

    let point = GeoPoint::new(lat, lon);
    if point.in_range() {
        Some(point)
    } else {
        tracing::warn!(name, lat, lon, "out-of-range coordinates; treating as not geocoded");
        None
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
