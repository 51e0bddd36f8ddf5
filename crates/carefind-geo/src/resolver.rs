//! Postal code to coordinates, through an ordered chain of resolution tiers.
//!
//! Tries the remote geocoder first, then the static postal table, then the
//! 3-digit prefix heuristic, and returns the first success. The remote
//! service is authoritative but unreliable; the static table guarantees
//! determinism for the dataset's known postal codes; the prefix tier degrades
//! the rest of the state to a coarse centroid instead of failing.

use carefind_core::PostalLocation;

use crate::error::{RemoteError, ResolveError};
use crate::remote::RemoteGeocoder;
use crate::table::{lookup_prefix, lookup_static};

/// Three-tier postal code resolver.
///
/// Holds its remote-tier configuration explicitly (endpoint, client
/// identifier, timeout) — nothing is read from process globals. The resolver
/// performs no internal retries and no throttling: callers that can issue
/// overlapping resolves must pace remote-tier invocations at one per second
/// or slower (see [`crate::pacing::RequestPacer`]).
pub struct PostalResolver {
    remote: RemoteGeocoder,
}

impl PostalResolver {
    /// Creates a resolver whose remote tier targets `base_url`.
    ///
    /// `user_agent` is the descriptive client identifier the geocoding
    /// service requires; `timeout_secs` bounds each remote lookup. Point
    /// `base_url` at a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the HTTP client cannot be constructed or
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, RemoteError> {
        Ok(Self {
            remote: RemoteGeocoder::new(base_url, user_agent, timeout_secs)?,
        })
    }

    /// Resolves a postal code input to a location.
    ///
    /// Input may contain spaces, hyphens, or a trailing `.0` spreadsheet
    /// artifact; anything that does not normalize to exactly five digits is
    /// rejected up front.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidFormat`] — input does not reduce to 5 digits.
    /// - [`ResolveError::NotFound`] — all three tiers exhausted. Remote-tier
    ///   failures (network, timeout, empty result) are never surfaced; they
    ///   fall through to the offline tiers.
    pub async fn resolve(&self, input: &str) -> Result<PostalLocation, ResolveError> {
        let postal_code = normalize_postal_code(input)?;

        // Tier 1: remote geocoder.
        match self.remote.lookup(&postal_code).await {
            Ok(location) => {
                tracing::debug!(postal_code, "resolved via remote geocoder");
                return Ok(location);
            }
            Err(RemoteError::NoMatch { .. }) => {
                tracing::debug!(postal_code, "remote geocoder had no match");
            }
            Err(e) => {
                tracing::warn!(postal_code, error = %e, "remote geocoder unavailable");
            }
        }

        // Tier 2: static postal table.
        if let Some(location) = lookup_static(&postal_code) {
            tracing::debug!(postal_code, "resolved via static postal table");
            return Ok(location);
        }

        // Tier 3: regional prefix heuristic.
        if let Some(location) = lookup_prefix(&postal_code) {
            tracing::debug!(postal_code, "resolved via prefix heuristic");
            return Ok(location);
        }

        Err(ResolveError::NotFound { postal_code })
    }
}

/// Reduces raw input to exactly five digits.
///
/// Strips a single trailing `.0` (left behind when postal codes pass through
/// numeric spreadsheet columns), then every remaining non-digit character.
fn normalize_postal_code(input: &str) -> Result<String, ResolveError> {
    let trimmed = input.trim();
    let without_artifact = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    let digits: String = without_artifact.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 5 {
        Ok(digits)
    } else {
        Err(ResolveError::InvalidFormat {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
