//! Compact text digest of the catalog, used as context for a conversational
//! assistant: `"name: summary (Fail: reason) | ..."`.

use pm_core::entities::CaseStudy;
use pm_core::responses::DigestResponse;

use crate::store::Catalog;

const SEPARATOR: &str = " | ";

fn digest_entry(study: &CaseStudy) -> String {
    format!(
        "{}: {} (Fail: {})",
        study.name,
        study.summary,
        study.why_it_failed.as_deref().unwrap_or_default()
    )
}

impl Catalog {
    #[must_use]
    pub fn digest(&self) -> String {
        self.studies()
            .iter()
            .map(|s| digest_entry(s))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    #[must_use]
    pub fn digest_response(&self) -> DigestResponse {
        DigestResponse {
            records: self.len(),
            digest: self.digest(),
        }
    }
}
