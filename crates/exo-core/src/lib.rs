//! # exo-core
//!
//! Derives a fictional planetary and lifeform profile from one record of raw
//! astronomical measurements.
//!
//! The pipeline runs strictly left to right:
//! - [`resolver`]: substitutes documented defaults for missing fields
//! - [`habitability`]: ordered range checks producing a verdict
//! - [`environment`]: size/mass x temperature taxonomy
//! - [`lifeform`]: size, color, communication, and diet formulas
//! - [`profile`]: narrative + parameter map, plus JSON export
//!
//! [`pipeline::derive_profile`] wires the stages together for a single record.
//! Every stage is a pure function over an immutable [`ResolvedAttributes`], so
//! concurrent invocations for different records need no coordination.

pub mod environment;
pub mod errors;
pub mod habitability;
pub mod lifeform;
pub mod pipeline;
pub mod profile;
pub mod record;
pub mod resolver;

pub use environment::{EnvironmentLabel, SizeClass, ThermalClass, classify};
pub use errors::CoreError;
pub use habitability::{HabitabilityRule, HabitabilityVerdict, evaluate};
pub use lifeform::{
    Color, CommunicationMethod, Diet, HabitatTag, LifeformAttributes, LifeformRequest, synthesize,
};
pub use pipeline::{ProfileReport, derive_profile, report};
pub use profile::{
    CandidateAssessment, ExoplanetParameters, LifeformSection, Profile, ProfileParameters, assemble,
};
pub use record::{FieldValue, Record};
pub use resolver::{MassSource, ResolvedAttributes, resolve};
