use thiserror::Error;

/// Failure modes of the public resolve contract.
///
/// There are exactly two: the input was not a postal code, or every
/// resolution tier was exhausted. Transient remote failures are deliberately
/// not represented — the caller cannot act differently on transient vs
/// permanent, so the remote tier's errors are swallowed internally and the
/// chain falls through to the static tiers.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("\"{input}\" is not reducible to a 5-digit postal code")]
    InvalidFormat { input: String },

    #[error("postal code {postal_code} could not be located by any resolution tier")]
    NotFound { postal_code: String },
}

/// Errors internal to the remote geocoding tier.
///
/// Never surfaced through [`ResolveError`]; logged and treated as tier
/// failure. Public only because resolver construction can fail with
/// [`RemoteError::Http`] if the underlying `reqwest::Client` cannot be built.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("geocoder returned unparseable {field} \"{value}\" for postal code {postal_code}")]
    BadCoordinate {
        field: &'static str,
        value: String,
        postal_code: String,
    },

    #[error("geocoder returned no match for postal code {postal_code}")]
    NoMatch { postal_code: String },
}
