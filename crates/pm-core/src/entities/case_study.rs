use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// Rendered when a case study has no country.
pub const PLACEHOLDER_COUNTRY: &str = "Not specified";
/// Rendered when a case study has no peak valuation.
pub const PLACEHOLDER_VALUATION: &str = "N/A";
/// Rendered when a case study has no key year.
pub const PLACEHOLDER_YEAR: &str = "Unknown";
/// Rendered when a case study has no failure reason.
pub const PLACEHOLDER_REASON: &str = "Detailed failure reason unavailable.";
/// Rendered when a case study has no long-form analysis.
pub const PLACEHOLDER_ANALYSIS: &str = "Detailed analysis not available.";

/// One dated entry in a case study's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: String,
    pub event: String,
}

/// A startup-failure case study. The sole entity in the catalog.
///
/// `name`, `category`, `status`, and `summary` are always present. Every other
/// field is optional in the dataset; missing scalars render as placeholders and
/// missing sequences deserialize as empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Free-text lifecycle label, e.g. "Bankrupt" or "Shut Down".
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Key year (collapse or founding).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_valuation: Option<String>,
    /// Badge tags, rendered in order. Duplicates are allowed.
    #[serde(default)]
    pub failure_keywords: Vec<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_analysis: Option<String>,
    #[serde(default)]
    pub founders: Vec<String>,
    /// Chronological by authoring convention; never re-sorted.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub key_mistakes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_it_failed: Option<String>,
    #[serde(default)]
    pub lessons_learned: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

impl CaseStudy {
    /// Deduplication key: the display name trimmed and lowercased.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.trending == Some(true)
    }

    #[must_use]
    pub fn country_or_placeholder(&self) -> &str {
        present(self.country.as_deref()).unwrap_or(PLACEHOLDER_COUNTRY)
    }

    #[must_use]
    pub fn valuation_or_placeholder(&self) -> &str {
        present(self.peak_valuation.as_deref()).unwrap_or(PLACEHOLDER_VALUATION)
    }

    #[must_use]
    pub fn year_or_placeholder(&self) -> &str {
        present(self.year.as_deref()).unwrap_or(PLACEHOLDER_YEAR)
    }

    #[must_use]
    pub fn reason_or_placeholder(&self) -> &str {
        present(self.why_it_failed.as_deref()).unwrap_or(PLACEHOLDER_REASON)
    }

    #[must_use]
    pub fn analysis_or_placeholder(&self) -> &str {
        present(self.detailed_analysis.as_deref()).unwrap_or(PLACEHOLDER_ANALYSIS)
    }

    /// Project onto the card shown in list and trending views.
    #[must_use]
    pub fn summary_card(&self) -> CaseStudySummary {
        CaseStudySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            country: self.country_or_placeholder().to_string(),
            year: self.year_or_placeholder().to_string(),
            peak_valuation: self.valuation_or_placeholder().to_string(),
            failure_keywords: self.failure_keywords.clone(),
            summary: self.summary.clone(),
            trending: self.is_trending(),
        }
    }
}

/// Empty strings count as missing, matching how the site renders them.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Card projection of a [`CaseStudy`] with placeholders applied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudySummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub country: String,
    pub year: String,
    pub peak_valuation: String,
    pub failure_keywords: Vec<String>,
    pub summary: String,
    pub trending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> CaseStudy {
        serde_json::from_value(serde_json::json!({
            "id": "s1",
            "name": "  WeWork ",
            "category": "Real Estate",
            "status": "Bankrupt",
            "summary": "Co-working space company."
        }))
        .expect("minimal record should deserialize")
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let study = minimal();
        assert!(study.failure_keywords.is_empty());
        assert!(study.timeline.is_empty());
        assert!(study.founders.is_empty());
        assert_eq!(study.trending, None);
    }

    #[test]
    fn normalized_name_trims_and_lowercases() {
        assert_eq!(minimal().normalized_name(), "wework");
    }

    #[test]
    fn placeholders_cover_missing_and_blank_fields() {
        let mut study = minimal();
        study.peak_valuation = Some("   ".into());
        assert_eq!(study.country_or_placeholder(), PLACEHOLDER_COUNTRY);
        assert_eq!(study.valuation_or_placeholder(), PLACEHOLDER_VALUATION);
        assert_eq!(study.year_or_placeholder(), PLACEHOLDER_YEAR);
        assert_eq!(study.reason_or_placeholder(), PLACEHOLDER_REASON);
        assert_eq!(study.analysis_or_placeholder(), PLACEHOLDER_ANALYSIS);
    }

    #[test]
    fn summary_card_carries_trending_flag() {
        let mut study = minimal();
        study.trending = Some(true);
        let card = study.summary_card();
        assert!(card.trending);
        assert_eq!(card.country, PLACEHOLDER_COUNTRY);
    }

    #[test]
    fn camel_case_keys_on_the_wire() {
        let mut study = minimal();
        study.peak_valuation = Some("$47 Billion".into());
        let json = serde_json::to_value(&study).unwrap();
        assert_eq!(json["peakValuation"], "$47 Billion");
        assert!(json.get("failureKeywords").is_some());
        assert!(json.get("whyItFailed").is_none());
    }
}
