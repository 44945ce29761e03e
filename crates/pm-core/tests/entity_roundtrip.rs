//! Serde roundtrip and JsonSchema validation tests for entity and view types.

use std::sync::Arc;

use pm_core::entities::*;
use pm_core::enums::Origin;
use pm_core::navigation::{Navigator, ViewState};
use pm_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn quibi() -> CaseStudy {
    CaseStudy {
        id: "s3".into(),
        name: "Quibi".into(),
        category: "Media".into(),
        status: "Shut Down".into(),
        country: Some("USA".into()),
        year: Some("2020".into()),
        peak_valuation: Some("$1.75 Billion".into()),
        failure_keywords: vec!["PMF".into(), "Timing".into()],
        summary: "Short-form streaming service shut down in 6 months.".into(),
        logo_url: None,
        overview: Some("Quibi raised $1.75 billion before launch.".into()),
        detailed_analysis: None,
        founders: vec!["Jeffrey Katzenberg".into(), "Meg Whitman".into()],
        timeline: vec![
            TimelineEvent {
                year: "2018".into(),
                event: "Founded".into(),
            },
            TimelineEvent {
                year: "2020".into(),
                event: "Launched and shut down".into(),
            },
        ],
        key_mistakes: vec!["Mobile-only format".into()],
        why_it_failed: Some("They solved a problem nobody had.".into()),
        lessons_learned: vec!["Validate demand before spending".into()],
        references: vec!["The Verge".into()],
        trending: Some(false),
    }
}

roundtrip_and_validate!(case_study_roundtrip, CaseStudy, quibi());

roundtrip_and_validate!(
    navigator_detail_roundtrip,
    Navigator,
    {
        let mut nav = Navigator::new();
        nav.nav_click("trending");
        nav.select_record(Arc::new(quibi()));
        nav
    }
);

roundtrip_and_validate!(
    view_state_home_roundtrip,
    ViewState,
    ViewState::Home
);

roundtrip_and_validate!(
    list_response_roundtrip,
    ListResponse,
    ListResponse {
        category: "Media".into(),
        search: "stream".into(),
        featured: false,
        total_matches: 1,
        hidden: 0,
        results: vec![quibi().summary_card()],
        empty_state: None,
    }
);

roundtrip_and_validate!(
    duplicates_response_roundtrip,
    DuplicatesResponse,
    DuplicatesResponse {
        authored: 3,
        unique: 2,
        duplicates: vec![DuplicateRecord {
            normalized_name: "ftx".into(),
            kept_id: "s4".into(),
            discarded_id: "ftx".into(),
            position: 2,
        }],
    }
);

// --- Schema rejection tests ---

#[test]
fn schema_rejects_case_study_without_summary() {
    let schema = serde_json::to_value(schema_for!(CaseStudy)).unwrap();
    let invalid = serde_json::json!({
        "id": "s3",
        "name": "Quibi",
        "category": "Media",
        "status": "Shut Down"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject case study without 'summary'");
}

#[test]
fn schema_rejects_non_string_keywords() {
    let schema = serde_json::to_value(schema_for!(CaseStudy)).unwrap();
    let invalid = serde_json::json!({
        "id": "s3",
        "name": "Quibi",
        "category": "Media",
        "status": "Shut Down",
        "summary": "Streaming.",
        "failureKeywords": [1, 2]
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject numeric failure keywords");
}

#[test]
fn schema_rejects_unknown_origin() {
    let schema = serde_json::to_value(schema_for!(ViewState)).unwrap();
    let mut instance = serde_json::to_value(ViewState::CaseStudy {
        study: Arc::new(quibi()),
        origin: Origin::Home,
    })
    .unwrap();
    instance["origin"] = serde_json::json!("about");
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "Should reject origin outside home/trending");
}
