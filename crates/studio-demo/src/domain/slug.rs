//! The closed set of demo experiences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use studio_core::error::DomainError;

/// Every interactive demo published on the site. Routes carry the kebab-case
/// form (`/experiences/personal-color`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceSlug {
    /// Personal color diagnosis.
    PersonalColor,
    /// Signature scent recommendation.
    ScentProfile,
    /// Fashion style profiler.
    StyleProfiler,
    /// Two-player couple chemistry test.
    CoupleChemistry,
    /// New-year fortune reading.
    Fortune,
    /// Travel style matcher.
    TravelStyle,
    /// Working-style persona.
    WorkPersona,
    /// Companion pet matcher.
    PetMatch,
    /// Cafe menu recommender.
    CafeMenu,
}

impl ExperienceSlug {
    /// Every experience, in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::PersonalColor,
        Self::ScentProfile,
        Self::StyleProfiler,
        Self::CoupleChemistry,
        Self::Fortune,
        Self::TravelStyle,
        Self::WorkPersona,
        Self::PetMatch,
        Self::CafeMenu,
    ];

    /// The route segment for this experience.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalColor => "personal-color",
            Self::ScentProfile => "scent-profile",
            Self::StyleProfiler => "style-profiler",
            Self::CoupleChemistry => "couple-chemistry",
            Self::Fortune => "fortune",
            Self::TravelStyle => "travel-style",
            Self::WorkPersona => "work-persona",
            Self::PetMatch => "pet-match",
            Self::CafeMenu => "cafe-menu",
        }
    }
}

impl fmt::Display for ExperienceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceSlug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown experience: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_strings_round_trip_for_every_slug() {
        for slug in ExperienceSlug::ALL {
            assert_eq!(slug.as_str().parse::<ExperienceSlug>().unwrap(), *slug);
            let json = serde_json::to_value(slug).unwrap();
            assert_eq!(json, serde_json::json!(slug.as_str()));
        }
    }

    #[test]
    fn test_unknown_slug_is_a_validation_error() {
        match "tarot".parse::<ExperienceSlug>() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "unknown experience: tarot"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
