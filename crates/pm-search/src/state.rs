use std::sync::Arc;

use pm_core::entities::{ALL_CATEGORIES, CaseStudy};
use pm_core::responses::{EmptyState, ListResponse};
use serde::{Deserialize, Serialize};

use crate::filter::{filter, is_all_categories, select_displayed};

const EMPTY_HINT: &str =
    "Try checking the spelling or use broader keywords like \"Retail\" or \"India\".";

/// The user's current filter bar and search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub active_category: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn new(active_category: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            active_category: active_category.into(),
            search_term: search_term.into(),
        }
    }

    /// No search and the "All" category: the featured listing.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && is_all_categories(&self.active_category)
    }

    /// Reset both inputs; the empty state's "clear all filters" action.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Filter the catalog and apply the featured cutoff.
    #[must_use]
    pub fn apply(&self, catalog: &[Arc<CaseStudy>], featured_limit: usize) -> Listing {
        let filtered = filter(catalog, &self.active_category, &self.search_term);
        let total_matches = filtered.len();
        let featured = self.is_default();
        let studies = select_displayed(
            filtered,
            &self.search_term,
            &self.active_category,
            featured_limit,
        );

        tracing::debug!(
            category = %self.active_category,
            search = %self.search_term,
            total_matches,
            shown = studies.len(),
            "filter applied"
        );

        let empty_state = (total_matches == 0).then(|| EmptyState {
            message: format!("No results found for \"{}\"", self.search_term),
            hint: EMPTY_HINT.to_string(),
        });

        Listing {
            hidden: total_matches - studies.len(),
            studies,
            total_matches,
            featured,
            empty_state,
        }
    }
}

/// What the grid shows for one [`FilterState`].
#[derive(Debug, Clone)]
pub struct Listing {
    pub studies: Vec<Arc<CaseStudy>>,
    pub total_matches: usize,
    /// The featured cutoff was in effect.
    pub featured: bool,
    /// Matches past the cutoff, reachable only by searching or filtering.
    pub hidden: usize,
    pub empty_state: Option<EmptyState>,
}

impl Listing {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    /// Record at a 1-based grid position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Arc<CaseStudy>> {
        position.checked_sub(1).and_then(|i| self.studies.get(i))
    }

    #[must_use]
    pub fn to_response(&self, state: &FilterState) -> ListResponse {
        ListResponse {
            category: state.active_category.clone(),
            search: state.search_term.clone(),
            featured: self.featured,
            total_matches: self.total_matches,
            hidden: self.hidden,
            results: self.studies.iter().map(|s| s.summary_card()).collect(),
            empty_state: self.empty_state.clone(),
        }
    }
}
