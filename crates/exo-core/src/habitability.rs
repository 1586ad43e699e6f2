//! Habitability rules.
//!
//! Five inclusive range checks, evaluated in a fixed order. The verdict is
//! true only when all pass; the first violated rule is kept for diagnostics.

use std::fmt;
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resolver::ResolvedAttributes;

/// One range check of the habitability cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HabitabilityRule {
    /// Equilibrium temperature allows liquid water.
    Temperature,
    /// Radius is Earth-like.
    Radius,
    /// Mass is Earth-like.
    Mass,
    /// Insolation falls inside the habitable zone.
    Insolation,
    /// Host star is a main-sequence F/G/K star.
    StellarTemperature,
}

impl HabitabilityRule {
    /// Evaluation order of the cascade.
    pub const ORDER: [Self; 5] = [
        Self::Temperature,
        Self::Radius,
        Self::Mass,
        Self::Insolation,
        Self::StellarTemperature,
    ];

    /// Inclusive accepted range.
    #[must_use]
    pub const fn bounds(self) -> RangeInclusive<f64> {
        match self {
            Self::Temperature => 240.0..=320.0,
            Self::Radius => 0.5..=1.8,
            Self::Mass => 0.3..=5.0,
            Self::Insolation => 0.35..=1.75,
            Self::StellarTemperature => 3700.0..=7200.0,
        }
    }

    /// The attribute this rule inspects.
    #[must_use]
    pub const fn value(self, attributes: &ResolvedAttributes) -> f64 {
        match self {
            Self::Temperature => attributes.equilibrium_temperature_k,
            Self::Radius => attributes.planet_radius_earth,
            Self::Mass => attributes.planet_mass_earth,
            Self::Insolation => attributes.insolation_earth_flux,
            Self::StellarTemperature => attributes.stellar_temperature_k,
        }
    }

    #[must_use]
    pub fn holds(self, attributes: &ResolvedAttributes) -> bool {
        self.bounds().contains(&self.value(attributes))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Radius => "radius",
            Self::Mass => "mass",
            Self::Insolation => "insolation",
            Self::StellarTemperature => "stellar_temperature",
        }
    }
}

impl fmt::Display for HabitabilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the habitability cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HabitabilityVerdict {
    pub habitable: bool,
    /// First rule that failed, `None` when habitable.
    pub failed_rule: Option<HabitabilityRule>,
}

impl HabitabilityVerdict {
    #[must_use]
    pub const fn habitable() -> Self {
        Self {
            habitable: true,
            failed_rule: None,
        }
    }

    #[must_use]
    pub const fn failed(rule: HabitabilityRule) -> Self {
        Self {
            habitable: false,
            failed_rule: Some(rule),
        }
    }
}

/// Run the cascade, stopping at the first violated rule.
#[must_use]
pub fn evaluate(attributes: &ResolvedAttributes) -> HabitabilityVerdict {
    match HabitabilityRule::ORDER
        .into_iter()
        .find(|rule| !rule.holds(attributes))
    {
        Some(rule) => {
            tracing::debug!(
                %rule,
                value = rule.value(attributes),
                "habitability rule failed"
            );
            HabitabilityVerdict::failed(rule)
        }
        None => HabitabilityVerdict::habitable(),
    }
}
