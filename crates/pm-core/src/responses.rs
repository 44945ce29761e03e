//! CLI response types returned as JSON by `pm` commands.
//!
//! These structs define the shape of JSON output for `pm list`, `pm show`,
//! `pm categories`, `pm duplicates`, and `pm digest`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CaseStudy, CaseStudySummary, TimelineEvent};

/// Shown in place of the grid when a filter matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

/// Response from `pm list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListResponse {
    pub category: String,
    pub search: String,
    /// True when the featured cutoff was applied (no filter, no search).
    pub featured: bool,
    pub total_matches: usize,
    /// Matches beyond the featured cutoff, reachable only by searching or filtering.
    pub hidden: usize,
    pub results: Vec<CaseStudySummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Response from `pm show`: a case study with placeholders applied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudyDetailResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub country: String,
    pub year: String,
    pub peak_valuation: String,
    pub failure_keywords: Vec<String>,
    pub summary: String,
    pub overview: Option<String>,
    pub detailed_analysis: String,
    pub founders: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
    pub key_mistakes: Vec<String>,
    pub why_it_failed: String,
    pub lessons_learned: Vec<String>,
    pub references: Vec<String>,
    pub trending: bool,
}

impl From<&CaseStudy> for CaseStudyDetailResponse {
    fn from(study: &CaseStudy) -> Self {
        Self {
            id: study.id.clone(),
            name: study.name.clone(),
            category: study.category.clone(),
            status: study.status.clone(),
            country: study.country_or_placeholder().to_string(),
            year: study.year_or_placeholder().to_string(),
            peak_valuation: study.valuation_or_placeholder().to_string(),
            failure_keywords: study.failure_keywords.clone(),
            summary: study.summary.clone(),
            overview: study.overview.clone(),
            detailed_analysis: study.analysis_or_placeholder().to_string(),
            founders: study.founders.clone(),
            timeline: study.timeline.clone(),
            key_mistakes: study.key_mistakes.clone(),
            why_it_failed: study.reason_or_placeholder().to_string(),
            lessons_learned: study.lessons_learned.clone(),
            references: study.references.clone(),
            trending: study.is_trending(),
        }
    }
}

/// Response from `pm categories`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoriesResponse {
    /// Configured filter bar, starting with "All".
    pub filter_bar: Vec<String>,
    /// Distinct categories present in the catalog, in first-occurrence order.
    pub present: Vec<String>,
}

/// A dataset entry dropped by first-wins deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DuplicateRecord {
    pub normalized_name: String,
    /// `id` of the earlier record that was kept.
    pub kept_id: String,
    pub discarded_id: String,
    /// Zero-based position of the discarded entry in the authored list.
    pub position: usize,
}

/// Response from `pm duplicates`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DuplicatesResponse {
    pub authored: usize,
    pub unique: usize,
    pub duplicates: Vec<DuplicateRecord>,
}

/// Response from `pm digest`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DigestResponse {
    pub records: usize,
    pub digest: String,
}
