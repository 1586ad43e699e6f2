//! Environment taxonomy.
//!
//! Two axes, size/mass and thermal, combine into one of ten labels. The size
//! branches are only mutually exclusive because of their evaluation order:
//! rocky, then mini-Neptune, then giant.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resolver::{MINI_NEPTUNE_RADIUS_LIMIT, ROCKY_RADIUS_LIMIT, ResolvedAttributes};

const ROCKY_MASS_LIMIT: f64 = 5.0;
const GIANT_MASS_LIMIT: f64 = 10.0;
const COLD_BELOW_K: f64 = 180.0;
const HOT_ABOVE_K: f64 = 320.0;

// ---------------------------------------------------------------------------
// SizeClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Rocky,
    MiniNeptune,
    Giant,
    Unclassified,
}

impl SizeClass {
    #[must_use]
    pub fn of(radius: f64, mass: f64) -> Self {
        if radius < ROCKY_RADIUS_LIMIT && mass < ROCKY_MASS_LIMIT {
            Self::Rocky
        } else if (ROCKY_RADIUS_LIMIT..MINI_NEPTUNE_RADIUS_LIMIT).contains(&radius) {
            Self::MiniNeptune
        } else if radius >= MINI_NEPTUNE_RADIUS_LIMIT || mass >= GIANT_MASS_LIMIT {
            Self::Giant
        } else {
            Self::Unclassified
        }
    }
}

// ---------------------------------------------------------------------------
// ThermalClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThermalClass {
    Cold,
    Temperate,
    Hot,
}

impl ThermalClass {
    #[must_use]
    pub fn of(temperature_k: f64) -> Self {
        if temperature_k < COLD_BELOW_K {
            Self::Cold
        } else if temperature_k > HOT_ABOVE_K {
            Self::Hot
        } else {
            Self::Temperate
        }
    }
}

// ---------------------------------------------------------------------------
// EnvironmentLabel
// ---------------------------------------------------------------------------

/// Planet environment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EnvironmentLabel {
    #[serde(rename = "Frozen rocky")]
    FrozenRocky,
    #[serde(rename = "Earth-like")]
    EarthLike,
    #[serde(rename = "Hot rocky")]
    HotRocky,
    #[serde(rename = "Cold Mini-Neptune")]
    ColdMiniNeptune,
    #[serde(rename = "Temperate Mini-Neptune")]
    TemperateMiniNeptune,
    #[serde(rename = "Hot Mini-Neptune")]
    HotMiniNeptune,
    #[serde(rename = "Ice Giant")]
    IceGiant,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Hot Jupiter")]
    HotJupiter,
    Unclassified,
}

impl EnvironmentLabel {
    pub const ALL: [Self; 10] = [
        Self::FrozenRocky,
        Self::EarthLike,
        Self::HotRocky,
        Self::ColdMiniNeptune,
        Self::TemperateMiniNeptune,
        Self::HotMiniNeptune,
        Self::IceGiant,
        Self::GasGiant,
        Self::HotJupiter,
        Self::Unclassified,
    ];

    /// Combination table.
    #[must_use]
    pub const fn from_classes(size: SizeClass, thermal: ThermalClass) -> Self {
        match (size, thermal) {
            (SizeClass::Rocky, ThermalClass::Cold) => Self::FrozenRocky,
            (SizeClass::Rocky, ThermalClass::Temperate) => Self::EarthLike,
            (SizeClass::Rocky, ThermalClass::Hot) => Self::HotRocky,
            (SizeClass::MiniNeptune, ThermalClass::Cold) => Self::ColdMiniNeptune,
            (SizeClass::MiniNeptune, ThermalClass::Temperate) => Self::TemperateMiniNeptune,
            (SizeClass::MiniNeptune, ThermalClass::Hot) => Self::HotMiniNeptune,
            (SizeClass::Giant, ThermalClass::Cold) => Self::IceGiant,
            (SizeClass::Giant, ThermalClass::Temperate) => Self::GasGiant,
            (SizeClass::Giant, ThermalClass::Hot) => Self::HotJupiter,
            (SizeClass::Unclassified, _) => Self::Unclassified,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrozenRocky => "Frozen rocky",
            Self::EarthLike => "Earth-like",
            Self::HotRocky => "Hot rocky",
            Self::ColdMiniNeptune => "Cold Mini-Neptune",
            Self::TemperateMiniNeptune => "Temperate Mini-Neptune",
            Self::HotMiniNeptune => "Hot Mini-Neptune",
            Self::IceGiant => "Ice Giant",
            Self::GasGiant => "Gas Giant",
            Self::HotJupiter => "Hot Jupiter",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for EnvironmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify resolved attributes into exactly one environment label.
#[must_use]
pub fn classify(attributes: &ResolvedAttributes) -> EnvironmentLabel {
    EnvironmentLabel::from_classes(
        SizeClass::of(attributes.planet_radius_earth, attributes.planet_mass_earth),
        ThermalClass::of(attributes.equilibrium_temperature_k),
    )
}
