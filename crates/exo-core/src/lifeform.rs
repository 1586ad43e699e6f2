//! Lifeform synthesis.
//!
//! Four deterministic formulas over resolved attributes, a caller-chosen
//! habitat tag, and a base size. The habitat tag is a lifestyle category and
//! is unrelated to the planet [`EnvironmentLabel`](crate::EnvironmentLabel).

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::resolver::ResolvedAttributes;

/// Smallest size a lifeform can have, in meters.
pub const MIN_SIZE_M: f64 = 0.1;
pub const DEFAULT_BASE_SIZE_M: f64 = 2.0;

const REFERENCE_TEMPERATURE_K: f64 = 288.0;
const LARGE_LIFEFORM_M: f64 = 3.0;
const SCORCHING_TEMPERATURE_K: f64 = 350.0;
const FRIGID_TEMPERATURE_K: f64 = 250.0;
const HIGH_INSOLATION: f64 = 2.0;

// ---------------------------------------------------------------------------
// HabitatTag
// ---------------------------------------------------------------------------

/// Lifestyle category chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HabitatTag {
    Aquatic,
    Forest,
    Desert,
    #[default]
    Terrestrial,
    /// Any other tag. Sized like terrestrial life.
    Unrecognized(String),
}

impl HabitatTag {
    /// Parse a tag case-insensitively, ignoring surrounding whitespace.
    /// Never fails.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.to_ascii_lowercase().as_str() {
            "aquatic" => Self::Aquatic,
            "forest" => Self::Forest,
            "desert" => Self::Desert,
            "terrestrial" => Self::Terrestrial,
            _ => Self::Unrecognized(tag.to_string()),
        }
    }

    /// Size multiplier for the habitat.
    #[must_use]
    pub const fn size_factor(&self) -> f64 {
        match self {
            Self::Aquatic => 1.3,
            Self::Desert => 0.8,
            Self::Forest | Self::Terrestrial | Self::Unrecognized(_) => 1.0,
        }
    }

    #[must_use]
    pub const fn is_aquatic(&self) -> bool {
        matches!(self, Self::Aquatic)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aquatic => "aquatic",
            Self::Forest => "forest",
            Self::Desert => "desert",
            Self::Terrestrial => "terrestrial",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for HabitatTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl fmt::Display for HabitatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Attribute vocabularies
// ---------------------------------------------------------------------------

/// RGB coloration. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Color(pub [u8; 3]);

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CommunicationMethod {
    #[serde(rename = "sonar or pressure waves")]
    SonarOrPressureWaves,
    #[serde(rename = "electromagnetic or chemical signals")]
    ElectromagneticOrChemical,
    #[serde(rename = "low-frequency sound")]
    LowFrequencySound,
    #[serde(rename = "vocal communication")]
    Vocal,
}

impl CommunicationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SonarOrPressureWaves => "sonar or pressure waves",
            Self::ElectromagneticOrChemical => "electromagnetic or chemical signals",
            Self::LowFrequencySound => "low-frequency sound",
            Self::Vocal => "vocal communication",
        }
    }
}

impl fmt::Display for CommunicationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Diet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Herbivore => "herbivore",
            Self::Carnivore => "carnivore",
            Self::Omnivore => "omnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesized lifeform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifeformAttributes {
    /// Meters, at least [`MIN_SIZE_M`].
    pub size: f64,
    #[serde(rename = "coloration")]
    pub color: Color,
    pub communication_method: CommunicationMethod,
    pub diet: Diet,
}

/// What the caller wants synthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeformRequest {
    pub habitat: HabitatTag,
    pub base_size: f64,
}

impl Default for LifeformRequest {
    fn default() -> Self {
        Self {
            habitat: HabitatTag::Terrestrial,
            base_size: DEFAULT_BASE_SIZE_M,
        }
    }
}

impl LifeformRequest {
    #[must_use]
    pub fn new(habitat: impl Into<HabitatTag>, base_size: f64) -> Self {
        Self {
            habitat: habitat.into(),
            base_size,
        }
    }

    /// Check the base-size precondition.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` unless the base size is a
    /// positive number.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_base_size(self.base_size)
    }
}

fn validate_base_size(base_size: f64) -> Result<(), CoreError> {
    if base_size > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid(
            "base_size",
            format!("must be positive, got {base_size}"),
        ))
    }
}

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

/// Smaller planets (weaker gravity) grow larger life.
#[must_use]
pub fn gravity_factor(radius: f64) -> f64 {
    (1.0 / radius).powf(0.5)
}

/// Cooler planets grow larger life, relative to Earth's 288 K.
#[must_use]
pub fn temperature_factor(temperature_k: f64) -> f64 {
    (REFERENCE_TEMPERATURE_K / temperature_k).powf(0.3)
}

/// Available stellar energy scales biomass.
#[must_use]
pub fn energy_factor(insolation: f64) -> f64 {
    (insolation + 1.0).log10().mul_add(0.8, 0.6)
}

/// Lifeform size in meters, floored at [`MIN_SIZE_M`].
///
/// Always finite: a zero radius or temperature drives the product to
/// infinity, which saturates at `f64::MAX`.
#[must_use]
pub fn size(attributes: &ResolvedAttributes, habitat: &HabitatTag, base_size: f64) -> f64 {
    let size = base_size
        * gravity_factor(attributes.planet_radius_earth)
        * temperature_factor(attributes.equilibrium_temperature_k)
        * habitat.size_factor()
        * energy_factor(attributes.insolation_earth_flux);
    // NaN.max(x) is x, so degenerate inputs also land on the floor.
    size.max(MIN_SIZE_M).min(f64::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Red tracks stellar temperature, green falls and blue rises with insolation.
#[must_use]
pub fn color(attributes: &ResolvedAttributes) -> Color {
    let insolation = attributes.insolation_earth_flux;
    Color::rgb(
        channel((attributes.stellar_temperature_k - 3000.0) / 4000.0 * 255.0),
        channel(1.0 / (insolation + 1.0) * 200.0),
        channel(insolation / 2.0 * 100.0),
    )
}

#[must_use]
pub fn communication_method(
    attributes: &ResolvedAttributes,
    habitat: &HabitatTag,
    size: f64,
) -> CommunicationMethod {
    if habitat.is_aquatic() {
        CommunicationMethod::SonarOrPressureWaves
    } else if attributes.equilibrium_temperature_k > SCORCHING_TEMPERATURE_K {
        CommunicationMethod::ElectromagneticOrChemical
    } else if size > LARGE_LIFEFORM_M {
        CommunicationMethod::LowFrequencySound
    } else {
        CommunicationMethod::Vocal
    }
}

#[must_use]
pub fn diet(attributes: &ResolvedAttributes, habitat: &HabitatTag, size: f64) -> Diet {
    if habitat.is_aquatic() {
        if size > LARGE_LIFEFORM_M {
            Diet::Omnivore
        } else {
            Diet::Herbivore
        }
    } else if attributes.insolation_earth_flux > HIGH_INSOLATION {
        Diet::Carnivore
    } else if attributes.equilibrium_temperature_k < FRIGID_TEMPERATURE_K {
        Diet::Herbivore
    } else {
        Diet::Omnivore
    }
}

/// Synthesize all lifeform attributes.
///
/// # Errors
///
/// Returns `CoreError::InvalidParameter` if `base_size` is not positive.
pub fn synthesize(
    attributes: &ResolvedAttributes,
    habitat: &HabitatTag,
    base_size: f64,
) -> Result<LifeformAttributes, CoreError> {
    validate_base_size(base_size)?;

    let size = size(attributes, habitat, base_size);
    Ok(LifeformAttributes {
        size,
        color: color(attributes),
        communication_method: communication_method(attributes, habitat, size),
        diet: diet(attributes, habitat, size),
    })
}
