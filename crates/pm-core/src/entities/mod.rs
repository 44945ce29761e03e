//! Entity structs for Postmortem domain objects.
//!
//! The dataset is authored in `camelCase` JSON, so entities keep that casing on
//! the wire. All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! JSON roundtrip and schema validation.

mod case_study;

pub use case_study::{
    ALL_CATEGORIES, CaseStudy, CaseStudySummary, TimelineEvent, PLACEHOLDER_ANALYSIS, PLACEHOLDER_COUNTRY,
    PLACEHOLDER_REASON, PLACEHOLDER_VALUATION, PLACEHOLDER_YEAR,
};
