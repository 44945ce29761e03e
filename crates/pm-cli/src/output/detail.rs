use std::fmt::Write;

use pm_core::responses::CaseStudyDetailResponse;

/// Text rendering of the detail page, section by section.
///
/// Empty sequences drop their section entirely; scalar fields always render,
/// falling back to placeholders.
#[must_use]
pub fn render_detail(detail: &CaseStudyDetailResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", detail.name, detail.id);
    let _ = writeln!(out, "{}", "=".repeat(detail.name.chars().count()));
    let _ = writeln!(out, "{}", detail.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "Category:       {}", detail.category);
    let _ = writeln!(out, "Status:         {}", detail.status);
    let _ = writeln!(out, "Country:        {}", detail.country);
    let _ = writeln!(out, "Year:           {}", detail.year);
    let _ = writeln!(out, "Peak valuation: {}", detail.peak_valuation);
    if !detail.failure_keywords.is_empty() {
        let _ = writeln!(out, "Keywords:       {}", detail.failure_keywords.join(", "));
    }
    if !detail.founders.is_empty() {
        let _ = writeln!(out, "Founders:       {}", detail.founders.join(", "));
    }

    if let Some(overview) = detail.overview.as_deref().filter(|o| !o.trim().is_empty()) {
        section(&mut out, "Overview");
        let _ = writeln!(out, "{overview}");
    }

    if !detail.timeline.is_empty() {
        section(&mut out, "Timeline");
        for entry in &detail.timeline {
            let _ = writeln!(out, "  {:>6}  {}", entry.year, entry.event);
        }
    }

    section(&mut out, "Why it failed");
    let _ = writeln!(out, "{}", detail.why_it_failed);

    section(&mut out, "Analysis");
    let _ = writeln!(out, "{}", detail.detailed_analysis);

    bullets(&mut out, "Key mistakes", &detail.key_mistakes);
    bullets(&mut out, "Lessons learned", &detail.lessons_learned);
    bullets(&mut out, "References", &detail.references);

    out.trim_end().to_string()
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

fn bullets(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    section(out, title);
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

#[cfg(test)]
mod tests {
    use pm_core::entities::CaseStudy;

    use super::*;

    fn detail(json: serde_json::Value) -> CaseStudyDetailResponse {
        let study: CaseStudy = serde_json::from_value(json).unwrap();
        CaseStudyDetailResponse::from(&study)
    }

    #[test]
    fn sparse_record_shows_placeholders() {
        let text = render_detail(&detail(serde_json::json!({
            "id": "s55",
            "name": "Koinex",
            "category": "Fintech",
            "status": "Shut Down",
            "summary": "Crypto exchange."
        })));
        assert!(text.starts_with("Koinex [s55]"));
        assert!(text.contains("Country:        Not specified"));
        assert!(text.contains("Peak valuation: N/A"));
        assert!(text.contains("Detailed failure reason unavailable."));
        assert!(text.contains("Detailed analysis not available."));
        assert!(!text.contains("Timeline"));
        assert!(!text.contains("Key mistakes"));
    }

    #[test]
    fn timeline_keeps_authored_order() {
        let text = render_detail(&detail(serde_json::json!({
            "id": "s3",
            "name": "Quibi",
            "category": "Media",
            "status": "Shut Down",
            "summary": "Short-form streaming.",
            "timeline": [
                { "year": "2020", "event": "Shut down" },
                { "year": "2018", "event": "Founded" }
            ],
            "lessonsLearned": ["Validate demand"]
        })));
        let shut = text.find("Shut down").unwrap();
        let founded = text.find("Founded").unwrap();
        assert!(shut < founded);
        assert!(text.contains("  - Validate demand"));
    }
}
