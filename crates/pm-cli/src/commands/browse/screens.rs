use std::fmt::Write;
use std::sync::Arc;

use pm_core::entities::CaseStudy;
use pm_core::navigation::ViewState;
use pm_core::responses::CaseStudyDetailResponse;

use super::session::BrowseSession;
use crate::output::render_detail;
use crate::output::table::{TableOptions, render_table};

const ABOUT: &str = "\
About Postmortem

The largest repository of startup postmortems. Learning from failure to build
the unicorns of tomorrow.

We document, analyze, and share the stories of startups that didn't make it:
not to celebrate their downfall, but to extract the lessons that can guide the
next generation of founders. Every shutdown and every pivot gone wrong holds
insights worth more than any success story.";

const AUTHORS: &[(&str, &str)] = &[
    ("Jefry Mammen", "Founder & Lead Researcher"),
    ("Aaron K.", "Chief Data Analyst"),
];

/// Text for whatever the navigator currently shows.
#[must_use]
pub fn render_screen(session: &BrowseSession<'_>, options: TableOptions) -> String {
    match session.navigator().view() {
        ViewState::Home => render_home(session, options),
        ViewState::Trending => {
            let mut out = String::from("Trending now\n\n");
            out.push_str(&numbered_grid(&session.trending(), options));
            out.push_str("\n\n'open <n>' for details, 'back' for home");
            out
        }
        ViewState::About => format!("{ABOUT}\n\n'back' for home"),
        ViewState::Authors => {
            let mut out = String::from("Authors\n");
            for (name, title) in AUTHORS {
                let _ = write!(out, "\n  {name}, {title}");
            }
            out.push_str("\n\n'back' for home");
            out
        }
        ViewState::CaseStudy { study, origin } => {
            let detail = CaseStudyDetailResponse::from(study.as_ref());
            format!("{}\n\n'back' returns to {origin}", render_detail(&detail))
        }
    }
}

fn render_home(session: &BrowseSession<'_>, options: TableOptions) -> String {
    let filters = session.filters();
    let listing = session.listing();

    let mut out = String::from("Postmortem: why startups fail\n");
    let _ = writeln!(
        out,
        "category: {}   search: \"{}\"",
        filters.active_category, filters.search_term
    );
    out.push('\n');

    if let Some(empty) = &listing.empty_state {
        let _ = write!(out, "{}\n{}\n\n'clear' to reset all filters", empty.message, empty.hint);
        return out;
    }

    out.push_str(&numbered_grid(&listing.studies, options));
    if listing.featured && listing.hidden > 0 {
        let _ = write!(
            out,
            "\n\n{} more case studies: search or pick a category to find them",
            listing.hidden
        );
    }
    out
}

fn numbered_grid(studies: &[Arc<CaseStudy>], options: TableOptions) -> String {
    if studies.is_empty() {
        return String::from("(no case studies)");
    }

    let rows = studies
        .iter()
        .enumerate()
        .map(|(index, study)| {
            vec![
                (index + 1).to_string(),
                study.name.clone(),
                study.category.clone(),
                study.status.clone(),
                study.year_or_placeholder().to_string(),
                study.failure_keywords.join(", "),
            ]
        })
        .collect::<Vec<_>>();

    render_table(
        &["#", "name", "category", "status", "year", "keywords"],
        &rows,
        options,
    )
}

#[cfg(test)]
mod tests {
    use pm_catalog::Catalog;

    use super::*;
    use crate::commands::browse::command::BrowseCommand;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn screen_after(lines: &[&str]) -> String {
        let catalog = Catalog::embedded().unwrap();
        let mut session = BrowseSession::new(&catalog, 12);
        for line in lines {
            let command = BrowseCommand::parse(line).unwrap().unwrap();
            session.execute(command).unwrap();
        }
        render_screen(&session, PLAIN)
    }

    #[test]
    fn home_shows_featured_grid_and_hidden_count() {
        let text = screen_after(&[]);
        assert!(text.contains("WeWork"));
        assert!(text.contains("more case studies"));
        assert!(!text.contains("MoviePass"));
    }

    #[test]
    fn empty_search_shows_empty_state() {
        let text = screen_after(&["search zzzznotfound"]);
        assert!(text.contains("No results found for \"zzzznotfound\""));
        assert!(text.contains("'clear'"));
    }

    #[test]
    fn detail_names_its_origin() {
        let text = screen_after(&["trending", "open 2"]);
        assert!(text.starts_with("GoMechanic"));
        assert!(text.ends_with("'back' returns to trending"));
    }

    #[test]
    fn authors_page_lists_people() {
        let text = screen_after(&["authors"]);
        assert!(text.contains("Jefry Mammen"));
    }
}
