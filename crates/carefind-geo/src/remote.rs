//! HTTP client for the remote geocoding tier.
//!
//! Talks to a Nominatim-compatible search endpoint, querying by postal code
//! constrained to the US. The service's usage policy requires a descriptive
//! `User-Agent` and at most one request per second sustained; the identifier
//! comes from configuration, and pacing is the caller's obligation (see
//! [`crate::pacing::RequestPacer`]).

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use carefind_core::{GeoPoint, PostalLocation};

use crate::error::RemoteError;

/// One place in the geocoder's response array. Coordinates arrive as
/// strings, locality detail in a nested address object.
#[derive(Debug, Deserialize)]
struct GeocoderPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    address: Option<GeocoderAddress>,
}

#[derive(Debug, Deserialize)]
struct GeocoderAddress {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl GeocoderAddress {
    /// The best available locality name: city, else town, else village.
    fn locality(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.village.clone())
    }
}

pub(crate) struct RemoteGeocoder {
    client: Client,
    base_url: Url,
}

impl RemoteGeocoder {
    /// Creates a geocoder client with the configured timeout and client
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RemoteError::UnexpectedStatus`] (with
    /// status 0) if `base_url` is not a valid URL.
    pub(crate) fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // search path joins onto the root rather than replacing a segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RemoteError::UnexpectedStatus {
            status: 0,
            url: format!("invalid base URL '{normalised}': {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up a normalized 5-digit postal code.
    ///
    /// Returns the first (best-match) result's coordinates plus locality and
    /// region when the address block carries them.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::Http`] — network failure or timeout.
    /// - [`RemoteError::UnexpectedStatus`] — any non-2xx status.
    /// - [`RemoteError::Deserialize`] — body does not match the expected shape,
    ///   including coordinate strings that do not parse as floats.
    /// - [`RemoteError::NoMatch`] — a well-formed, empty result array.
    pub(crate) async fn lookup(&self, postal_code: &str) -> Result<PostalLocation, RemoteError> {
        let mut url = self.base_url.join("search").map_err(|e| {
            RemoteError::UnexpectedStatus {
                status: 0,
                url: format!("cannot build search URL: {e}"),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("postalcode", postal_code)
            .append_pair("country", "us")
            .append_pair("format", "jsonv2")
            .append_pair("addressdetails", "1")
            .append_pair("limit", "1");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let places: Vec<GeocoderPlace> =
            serde_json::from_str(&body).map_err(|e| RemoteError::Deserialize {
                context: format!("postal code lookup for {postal_code}"),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            return Err(RemoteError::NoMatch {
                postal_code: postal_code.to_string(),
            });
        };

        let latitude = parse_coordinate(&place.lat, "lat", postal_code)?;
        let longitude = parse_coordinate(&place.lon, "lon", postal_code)?;

        let (city, region) = place
            .address
            .map(|a| (a.locality(), a.state.clone()))
            .unwrap_or((None, None));

        Ok(PostalLocation {
            postal_code: postal_code.to_string(),
            point: GeoPoint::new(latitude, longitude),
            city,
            region,
        })
    }
}

fn parse_coordinate(
    raw: &str,
    field: &'static str,
    postal_code: &str,
) -> Result<f64, RemoteError> {
    raw.parse::<f64>().map_err(|_| RemoteError::BadCoordinate {
        field,
        value: raw.to_string(),
        postal_code: postal_code.to_string(),
    })
}
