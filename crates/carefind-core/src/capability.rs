//! The five recognized service capabilities and their boolean flag set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five recognized capability filter names.
///
/// The API and CLI accept these in kebab-case (`"dental-care"`); snake case
/// is tolerated since the upstream CSV columns use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    PrimaryCare,
    DentalCare,
    Vision,
    BehavioralHealth,
    Pharmacy,
}

#[derive(Debug, Error)]
#[error("unrecognized capability \"{0}\"; expected one of primary-care, dental-care, vision, behavioral-health, pharmacy")]
pub struct UnknownCapability(pub String);

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::PrimaryCare,
        Capability::DentalCare,
        Capability::Vision,
        Capability::BehavioralHealth,
        Capability::Pharmacy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::PrimaryCare => "primary-care",
            Capability::DentalCare => "dental-care",
            Capability::Vision => "vision",
            Capability::BehavioralHealth => "behavioral-health",
            Capability::Pharmacy => "pharmacy",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "primary-care" => Ok(Capability::PrimaryCare),
            "dental-care" => Ok(Capability::DentalCare),
            "vision" => Ok(Capability::Vision),
            "behavioral-health" => Ok(Capability::BehavioralHealth),
            "pharmacy" => Ok(Capability::Pharmacy),
            _ => Err(UnknownCapability(s.to_string())),
        }
    }
}

/// Derived boolean classification of a facility's advertised services.
///
/// Computed from free text by the service type matcher; never authoritative
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityFlags {
    pub primary_care: bool,
    pub dental_care: bool,
    pub vision: bool,
    pub behavioral_health: bool,
    pub pharmacy: bool,
}

impl CapabilityFlags {
    /// Returns the flag for one capability.
    #[must_use]
    pub const fn has(self, capability: Capability) -> bool {
        match capability {
            Capability::PrimaryCare => self.primary_care,
            Capability::DentalCare => self.dental_care,
            Capability::Vision => self.vision,
            Capability::BehavioralHealth => self.behavioral_health,
            Capability::Pharmacy => self.pharmacy,
        }
    }

    /// Returns `true` if at least one of `requested` is set.
    #[must_use]
    pub fn matches_any(self, requested: &[Capability]) -> bool {
        requested.iter().any(|c| self.has(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn from_str_accepts_kebab_and_snake_case() {
        assert_eq!(
            Capability::from_str("dental-care").unwrap(),
            Capability::DentalCare
        );
        assert_eq!(
            Capability::from_str("behavioral_health").unwrap(),
            Capability::BehavioralHealth
        );
        assert_eq!(
            Capability::from_str(" Pharmacy ").unwrap(),
            Capability::Pharmacy
        );
    }

    #[test]
    fn from_str_rejects_unknown_name() {
        let err = Capability::from_str("midwifery").unwrap_err();
        assert_eq!(err.0, "midwifery");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Capability::PrimaryCare).expect("serialize");
        assert_eq!(json, "\"primary-care\"");
        let back: Capability = serde_json::from_str("\"behavioral-health\"").expect("deserialize");
        assert_eq!(back, Capability::BehavioralHealth);
    }

    #[test]
    fn matches_any_is_an_or_across_requested_flags() {
        let flags = CapabilityFlags {
            dental_care: true,
            ..CapabilityFlags::default()
        };
        assert!(flags.matches_any(&[Capability::DentalCare, Capability::Vision]));
        assert!(!flags.matches_any(&[Capability::Vision, Capability::Pharmacy]));
        assert!(!flags.matches_any(&[]));
    }
}
