//! Field resolution: raw record in, fully populated attributes out.
//!
//! Each canonical field is looked up under its own name first and then under
//! the dataset column aliases upstream tables use. Missing values fall back
//! to Earth/Sun defaults; a missing mass is estimated from radius. This stage
//! never fails.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::Record;

pub const EQUILIBRIUM_TEMPERATURE_KEYS: &[&str] = &["equilibrium_temperature_K", "koi_teq", "pl_eqt"];
pub const PLANET_RADIUS_KEYS: &[&str] = &["planet_radius_earth", "koi_prad", "pl_rade"];
pub const PLANET_MASS_KEYS: &[&str] = &["planet_mass_earth", "pl_bmasse"];
pub const INSOLATION_KEYS: &[&str] = &["insolation_earth_flux", "koi_insol", "pl_insol"];
pub const STELLAR_TEMPERATURE_KEYS: &[&str] = &["stellar_temperature_K", "koi_steff", "st_teff"];

pub const DEFAULT_EQUILIBRIUM_TEMPERATURE_K: f64 = 288.0;
pub const DEFAULT_PLANET_RADIUS_EARTH: f64 = 1.0;
pub const DEFAULT_INSOLATION_EARTH_FLUX: f64 = 1.0;
pub const DEFAULT_STELLAR_TEMPERATURE_K: f64 = 5778.0;

/// Upper radius bound of the rocky mass-radius regime (exclusive).
pub const ROCKY_RADIUS_LIMIT: f64 = 1.8;
/// Upper radius bound of the mini-Neptune mass-radius regime (exclusive).
pub const MINI_NEPTUNE_RADIUS_LIMIT: f64 = 3.5;
const MINI_NEPTUNE_MASS_EXPONENT: f64 = 2.06;
/// Mass assumed for bodies at or above the mini-Neptune radius limit.
pub const GIANT_FALLBACK_MASS_EARTH: f64 = 10.0;

/// Where the resolved planet mass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MassSource {
    Measured,
    EstimatedFromRadius,
}

/// Fully populated measurements. No field is ever missing or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedAttributes {
    #[serde(rename = "equilibrium_temperature_K")]
    pub equilibrium_temperature_k: f64,
    pub planet_radius_earth: f64,
    pub planet_mass_earth: f64,
    pub insolation_earth_flux: f64,
    #[serde(rename = "stellar_temperature_K")]
    pub stellar_temperature_k: f64,
    pub mass_source: MassSource,
}

impl ResolvedAttributes {
    /// Earth around the Sun: every default applied, mass measured as 1.0.
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            equilibrium_temperature_k: DEFAULT_EQUILIBRIUM_TEMPERATURE_K,
            planet_radius_earth: DEFAULT_PLANET_RADIUS_EARTH,
            planet_mass_earth: 1.0,
            insolation_earth_flux: DEFAULT_INSOLATION_EARTH_FLUX,
            stellar_temperature_k: DEFAULT_STELLAR_TEMPERATURE_K,
            mass_source: MassSource::Measured,
        }
    }
}

/// Piecewise power-law mass estimate (Earth masses) from radius (Earth radii).
#[must_use]
pub fn estimate_mass_from_radius(radius: f64) -> f64 {
    if radius < ROCKY_RADIUS_LIMIT {
        radius.powi(3)
    } else if radius < MINI_NEPTUNE_RADIUS_LIMIT {
        radius.powf(MINI_NEPTUNE_MASS_EXPONENT)
    } else {
        GIANT_FALLBACK_MASS_EARTH
    }
}

fn field_or_default(record: &Record, keys: &[&str], default: f64) -> f64 {
    record.first_number(keys).unwrap_or_else(|| {
        tracing::debug!(field = keys[0], default, "field missing; using default");
        default
    })
}

/// Resolve a raw record into a complete attribute set.
#[must_use]
pub fn resolve(record: &Record) -> ResolvedAttributes {
    let equilibrium_temperature_k = field_or_default(
        record,
        EQUILIBRIUM_TEMPERATURE_KEYS,
        DEFAULT_EQUILIBRIUM_TEMPERATURE_K,
    );
    let planet_radius_earth =
        field_or_default(record, PLANET_RADIUS_KEYS, DEFAULT_PLANET_RADIUS_EARTH);

    let (planet_mass_earth, mass_source) = match record.first_number(PLANET_MASS_KEYS) {
        Some(mass) => (mass, MassSource::Measured),
        None => {
            let mass = estimate_mass_from_radius(planet_radius_earth);
            tracing::debug!(
                radius = planet_radius_earth,
                mass,
                "planet mass missing; estimated from radius"
            );
            (mass, MassSource::EstimatedFromRadius)
        }
    };

    let insolation_earth_flux =
        field_or_default(record, INSOLATION_KEYS, DEFAULT_INSOLATION_EARTH_FLUX);
    let stellar_temperature_k = field_or_default(
        record,
        STELLAR_TEMPERATURE_KEYS,
        DEFAULT_STELLAR_TEMPERATURE_K,
    );

    ResolvedAttributes {
        equilibrium_temperature_k,
        planet_radius_earth,
        planet_mass_earth,
        insolation_earth_flux,
        stellar_temperature_k,
        mass_source,
    }
}
