use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use pm_core::entities::CaseStudy;
use pm_core::errors::CoreError;
use pm_core::responses::{DuplicateRecord, DuplicatesResponse};

/// Deduplicated, read-only collection of case studies.
///
/// Records are shared as `Arc<CaseStudy>` so listings and the navigation
/// view-model hold references into the catalog rather than copies.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    studies: Vec<Arc<CaseStudy>>,
    trending: Vec<Arc<CaseStudy>>,
    duplicates: Vec<DuplicateRecord>,
    authored: usize,
}

/// Build the catalog from the authored list.
///
/// Iterates in order and inserts a record only if its normalized name is not
/// already present. The output keeps the relative order of first occurrences.
/// The trending list is collected from the authored records before dedup, so a
/// flagged record dropped as a duplicate is still trending.
/// Never fails; optional fields are left as authored.
#[must_use]
pub fn build_catalog(raw: Vec<CaseStudy>) -> Catalog {
    let authored = raw.len();
    let mut unique: IndexMap<String, Arc<CaseStudy>> = IndexMap::with_capacity(authored);
    let mut trending = Vec::new();
    let mut duplicates = Vec::new();

    for (position, study) in raw.into_iter().enumerate() {
        match unique.entry(study.normalized_name()) {
            Entry::Vacant(slot) => {
                let study = slot.insert(Arc::new(study));
                if study.is_trending() {
                    trending.push(Arc::clone(study));
                }
            }
            Entry::Occupied(slot) => {
                let kept = slot.get();
                tracing::warn!(
                    name = %study.name,
                    kept_id = %kept.id,
                    discarded_id = %study.id,
                    position,
                    "duplicate case study discarded; first occurrence wins"
                );
                duplicates.push(DuplicateRecord {
                    normalized_name: slot.key().clone(),
                    kept_id: kept.id.clone(),
                    discarded_id: study.id.clone(),
                    position,
                });
                if study.is_trending() {
                    trending.push(Arc::new(study));
                }
            }
        }
    }

    tracing::debug!(
        authored,
        unique = unique.len(),
        discarded = duplicates.len(),
        trending = trending.len(),
        "catalog built"
    );

    Catalog {
        studies: unique.into_values().collect(),
        trending,
        duplicates,
        authored,
    }
}

impl Catalog {
    #[must_use]
    pub fn studies(&self) -> &[Arc<CaseStudy>] {
        &self.studies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.studies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    /// Entries dropped by deduplication, in authored order.
    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateRecord] {
        &self.duplicates
    }

    /// Number of records in the authored list, before deduplication.
    #[must_use]
    pub const fn authored_count(&self) -> usize {
        self.authored
    }

    #[must_use]
    pub fn duplicates_report(&self) -> DuplicatesResponse {
        DuplicatesResponse {
            authored: self.authored,
            unique: self.studies.len(),
            duplicates: self.duplicates.clone(),
        }
    }

    /// Resolve a record by exact `id`, falling back to its normalized name.
    ///
    /// `id` is not unique across the authored list; the first catalog entry
    /// with a matching `id` wins.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when neither key matches.
    pub fn find(&self, key: &str) -> Result<&Arc<CaseStudy>, CoreError> {
        let key = key.trim();
        if let Some(study) = self.studies.iter().find(|s| s.id == key) {
            return Ok(study);
        }

        let normalized = key.to_lowercase();
        self.studies
            .iter()
            .find(|s| s.normalized_name() == normalized)
            .ok_or_else(|| CoreError::case_study_not_found(key))
    }

    /// Authored records flagged as trending, in authored order.
    ///
    /// Taken before dedup: kept records are shared with [`Catalog::studies`],
    /// discarded duplicates appear as authored.
    #[must_use]
    pub fn trending(&self) -> Vec<Arc<CaseStudy>> {
        self.trending.clone()
    }

    /// Distinct categories in first-occurrence order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for study in &self.studies {
            if !seen.contains(&study.category.as_str()) {
                seen.push(&study.category);
            }
        }
        seen
    }
}
