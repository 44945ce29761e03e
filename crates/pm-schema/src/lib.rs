//! # pm-schema
//!
//! JSON Schema generation, validation, and registry for Postmortem.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of the case-study dataset resource before it is deserialized
//! - Schema export for external tooling (`pm schema` command, dataset authoring)
//!
//! ## Architecture
//!
//! Entity types are defined in `pm-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and export layer.
//! `pm-catalog` depends on it to validate datasets at load time.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{DATASET_SCHEMA, SchemaRegistry};
