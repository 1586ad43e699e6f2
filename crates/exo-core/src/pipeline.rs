//! Single-record pipeline: resolve, evaluate, classify, synthesize, assemble.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{EnvironmentLabel, SizeClass, ThermalClass, classify};
use crate::errors::CoreError;
use crate::habitability::{HabitabilityVerdict, evaluate};
use crate::lifeform::{LifeformRequest, synthesize};
use crate::profile::{CandidateAssessment, Profile, assemble};
use crate::record::Record;
use crate::resolver::{ResolvedAttributes, resolve};

/// Derive the profile for one record.
///
/// The base size is validated up front, so an invalid request fails the
/// record whether or not the body turns out to be habitable. Lifeform
/// synthesis only runs for habitable bodies.
///
/// # Errors
///
/// Returns `CoreError::InvalidParameter` if the request's base size is not
/// positive.
pub fn derive_profile(
    record: &Record,
    request: &LifeformRequest,
    assessment: Option<CandidateAssessment>,
) -> Result<Profile, CoreError> {
    request.validate()?;

    let attributes = resolve(record);
    let verdict = evaluate(&attributes);
    let environment = classify(&attributes);

    let lifeform = if verdict.habitable {
        Some(synthesize(&attributes, &request.habitat, request.base_size)?)
    } else {
        None
    };

    tracing::debug!(
        habitable = verdict.habitable,
        %environment,
        habitat = %request.habitat,
        "profile derived"
    );

    Ok(assemble(&verdict, environment, lifeform)
        .with_name(record.display_name())
        .with_classifier(assessment))
}

/// Intermediate results of every stage, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileReport {
    pub attributes: ResolvedAttributes,
    pub verdict: HabitabilityVerdict,
    pub size_class: SizeClass,
    pub thermal_class: ThermalClass,
    pub environment: EnvironmentLabel,
}

/// Run the non-failing stages and report what each decided.
#[must_use]
pub fn report(record: &Record) -> ProfileReport {
    let attributes = resolve(record);
    ProfileReport {
        verdict: evaluate(&attributes),
        size_class: SizeClass::of(attributes.planet_radius_earth, attributes.planet_mass_earth),
        thermal_class: ThermalClass::of(attributes.equilibrium_temperature_k),
        environment: classify(&attributes),
        attributes,
    }
}
