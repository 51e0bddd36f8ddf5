//! Free-text service classification.
//!
//! Turns the comma-separated service list a facility advertises into the
//! five boolean capability flags. Matching is substring-based and
//! case-insensitive; one token may set several flags. Deterministic and
//! side-effect-free.

use carefind_core::CapabilityFlags;

const PRIMARY_CARE_KEYWORDS: &[&str] = &[
    "primary care",
    "internal medicine",
    "family medicine",
    "general practice",
];

const DENTAL_CARE_KEYWORDS: &[&str] = &["dental", "dentistry"];

const VISION_KEYWORDS: &[&str] = &["vision", "eye care", "optometry", "ophthalmology"];

const BEHAVIORAL_HEALTH_KEYWORDS: &[&str] = &[
    "behavioral health",
    "mental health",
    "psychiatry",
    "counseling",
    "therapy",
];

const PHARMACY_KEYWORDS: &[&str] = &["pharmacy"];

/// Picks the authoritative service text among the three enrichment stages.
///
/// Precedence: manually curated, else AI enriched, else the scraped
/// original; whitespace-only fields count as absent. Centralizing this here
/// keeps the "services offered" display string and the classification in
/// agreement — consumers must not chain their own fallbacks.
#[must_use]
pub fn preferred_service_text<'a>(
    curated: Option<&'a str>,
    enriched: Option<&'a str>,
    original: Option<&'a str>,
) -> Option<&'a str> {
    [curated, enriched, original]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|text| !text.is_empty())
}

/// Classifies raw service text into capability flags.
///
/// Splits on commas, trims and lowercases each token, then tests each token
/// for the capability keyword sets. Absent or empty input yields all-false
/// flags — missing data is not a claim that a service is unavailable.
#[must_use]
pub fn classify(raw_service_text: Option<&str>) -> CapabilityFlags {
    let mut flags = CapabilityFlags::default();
    let Some(raw) = raw_service_text else {
        return flags;
    };

    for token in raw.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        flags.primary_care |= contains_any(&token, PRIMARY_CARE_KEYWORDS);
        flags.dental_care |= contains_any(&token, DENTAL_CARE_KEYWORDS);
        flags.vision |= contains_any(&token, VISION_KEYWORDS);
        flags.behavioral_health |= contains_any(&token, BEHAVIORAL_HEALTH_KEYWORDS);
        flags.pharmacy |= contains_any(&token, PHARMACY_KEYWORDS);
    }

    flags
}

fn contains_any(token: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| token.contains(keyword))
}
