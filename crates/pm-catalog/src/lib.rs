//! # pm-catalog
//!
//! The single authoritative, deduplicated list of case studies.
//!
//! A dataset is a JSON array of [`CaseStudy`](pm_core::entities::CaseStudy)
//! records. Loading validates it against the `case_study_dataset` schema,
//! deserializes it, and runs [`build_catalog`] exactly once. The resulting
//! [`Catalog`] is read-only for the rest of the process.
//!
//! Deduplication keys on the trimmed, lowercased name. The first occurrence
//! wins and later duplicates are dropped without merging, even when they carry
//! more data. Every drop is logged and kept in [`Catalog::duplicates`].

mod digest;
mod error;
mod loader;
mod store;

pub use error::CatalogError;
pub use loader::EMBEDDED_DATASET;
pub use store::{Catalog, build_catalog};
