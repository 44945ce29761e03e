//! Central schema registry for all Postmortem types.
//!
//! The `SchemaRegistry` builds JSON Schemas from pm-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use pm_core::entities::CaseStudy;
use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema for a whole dataset resource (an array of case studies).
pub const DATASET_SCHEMA: &str = "case_study_dataset";

/// Central store of all JSON Schemas in the Postmortem system.
///
/// Built from pm-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity, view-state, and response
    /// schemas from pm-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (3) ---
        register!(schemas, "case_study", CaseStudy);
        register!(schemas, "timeline_event", pm_core::entities::TimelineEvent);
        register!(
            schemas,
            "case_study_summary",
            pm_core::entities::CaseStudySummary
        );

        // --- Dataset resource (1) ---
        register!(schemas, DATASET_SCHEMA, Vec<CaseStudy>);

        // --- View state (2) ---
        register!(schemas, "view_state", pm_core::navigation::ViewState);
        register!(schemas, "navigator", pm_core::navigation::Navigator);

        // --- CLI response types (6) ---
        register!(schemas, "list_response", pm_core::responses::ListResponse);
        register!(
            schemas,
            "case_study_detail_response",
            pm_core::responses::CaseStudyDetailResponse
        );
        register!(
            schemas,
            "categories_response",
            pm_core::responses::CategoriesResponse
        );
        register!(
            schemas,
            "duplicate_record",
            pm_core::responses::DuplicateRecord
        );
        register!(
            schemas,
            "duplicates_response",
            pm_core::responses::DuplicatesResponse
        );
        register!(
            schemas,
            "digest_response",
            pm_core::responses::DigestResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use pm_core::navigation::Navigator;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    fn record(name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": name.to_lowercase(),
            "name": name,
            "category": "Fintech",
            "status": "Bankrupt",
            "summary": "Crypto exchange that collapsed."
        })
    }

    #[test]
    fn registry_has_expected_count() {
        let reg = registry();
        // 3 entities + 1 dataset + 2 view state + 6 responses = 12
        assert_eq!(reg.schema_count(), 12);
    }

    #[test]
    fn registry_list_is_sorted() {
        let reg = registry();
        let names = reg.list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_valid_dataset() {
        let reg = registry();
        let dataset = serde_json::json!([record("FTX"), record("Theranos")]);
        assert!(reg.validate(DATASET_SCHEMA, &dataset).is_ok());
    }

    #[test]
    fn validate_tolerates_missing_optional_fields() {
        let reg = registry();
        let mut sparse = record("Koinex");
        sparse["trending"] = serde_json::json!(true);
        assert!(reg.validate("case_study", &sparse).is_ok());
    }

    #[test]
    fn validate_rejects_dataset_object() {
        let reg = registry();
        let not_an_array = record("FTX");
        assert!(reg.validate(DATASET_SCHEMA, &not_an_array).is_err());
    }

    #[test]
    fn validate_reports_every_bad_record() {
        let reg = registry();
        let mut missing_name = record("FTX");
        missing_name.as_object_mut().unwrap().remove("name");
        let mut bad_timeline = record("Quibi");
        bad_timeline["timeline"] = serde_json::json!([{ "year": "2020" }]);

        let dataset = serde_json::json!([missing_name, record("Enron"), bad_timeline]);
        match reg.validate(DATASET_SCHEMA, &dataset) {
            Err(SchemaError::ValidationFailed { errors }) => assert!(errors.len() >= 2),
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_navigator_state() {
        let reg = registry();
        let study = serde_json::from_value(record("FTX")).unwrap();
        let mut nav = Navigator::new();
        nav.nav_click("trending");
        nav.select_record(Arc::new(study));
        let json = serde_json::to_value(&nav).unwrap();
        assert!(reg.validate("navigator", &json).is_ok());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let reg = registry();
        let result = reg.validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
