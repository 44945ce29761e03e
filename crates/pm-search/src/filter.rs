use std::sync::Arc;

use pm_core::entities::{ALL_CATEGORIES, CaseStudy};

/// True only for the exact "All" sentinel. Any other spelling is an ordinary
/// category name.
#[must_use]
pub fn is_all_categories(category: &str) -> bool {
    category == ALL_CATEGORIES
}

/// Substring predicate over name, category, status, summary and every
/// failure keyword. `term_lower` must already be lowercased; empty matches.
#[must_use]
pub fn matches_search(study: &CaseStudy, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }

    [&study.name, &study.category, &study.status, &study.summary]
        .into_iter()
        .chain(study.failure_keywords.iter())
        .any(|field| field.to_lowercase().contains(term_lower))
}

/// Records matching both the category predicate and the search predicate.
///
/// "All" matches every record; any other category is compared to
/// `record.category` case-insensitively. Substring containment is
/// case-insensitive and the term is used as given (no trimming). Catalog order
/// is preserved.
#[must_use]
pub fn filter(
    catalog: &[Arc<CaseStudy>],
    active_category: &str,
    search_term: &str,
) -> Vec<Arc<CaseStudy>> {
    let all = is_all_categories(active_category);
    let category = active_category.to_lowercase();
    let term = search_term.to_lowercase();

    catalog
        .iter()
        .filter(|study| all || study.category.to_lowercase() == category)
        .filter(|study| matches_search(study, &term))
        .cloned()
        .collect()
}

/// Apply the featured cutoff to an already filtered list.
///
/// The first `featured_limit` records are kept only when the search term is
/// empty and the category is "All". Any active filter shows every match.
#[must_use]
pub fn select_displayed(
    mut filtered: Vec<Arc<CaseStudy>>,
    search_term: &str,
    active_category: &str,
    featured_limit: usize,
) -> Vec<Arc<CaseStudy>> {
    if search_term.is_empty() && is_all_categories(active_category) {
        filtered.truncate(featured_limit);
    }
    filtered
}
