//! # exo-schema
//!
//! JSON Schema generation and validation for exoprofile.
//!
//! Types are defined in `exo-core` with `#[derive(JsonSchema)]`. This crate
//! collects their schemas into a [`SchemaRegistry`] so the CLI can print them
//! (`exoprofile schema`) and validate inbound records and outbound profiles.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
