use std::sync::Arc;

use pm_catalog::Catalog;
use pm_core::entities::CaseStudy;
use pm_core::enums::{NavTarget, Screen};
use pm_core::navigation::{Navigator, ScrollRequest};
use pm_search::{FilterState, Listing};
use serde::Serialize;

use super::command::BrowseCommand;

/// Result of one command, for the session loop to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The screen changed or its grid was refreshed.
    Moved(ScrollRequest),
    /// Print this text and keep the screen as is.
    Message(String),
    Quit,
}

/// Serialized form of the session's view-model.
#[derive(Debug, Serialize)]
pub struct SessionState<'a> {
    pub navigator: &'a Navigator,
    pub filters: &'a FilterState,
}

/// Navigation and filter view-models over one catalog.
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    featured_limit: usize,
    navigator: Navigator,
    filters: FilterState,
}

impl<'a> BrowseSession<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, featured_limit: usize) -> Self {
        Self {
            catalog,
            featured_limit,
            navigator: Navigator::new(),
            filters: FilterState::default(),
        }
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The home grid under the current filters.
    #[must_use]
    pub fn listing(&self) -> Listing {
        self.filters.apply(self.catalog.studies(), self.featured_limit)
    }

    #[must_use]
    pub fn trending(&self) -> Vec<Arc<CaseStudy>> {
        self.catalog.trending()
    }

    #[must_use]
    pub fn state(&self) -> SessionState<'_> {
        SessionState {
            navigator: &self.navigator,
            filters: &self.filters,
        }
    }

    /// Apply one command to the view-models.
    ///
    /// # Errors
    ///
    /// Fails when `open` names a grid position or record that does not exist.
    pub fn execute(&mut self, command: BrowseCommand) -> anyhow::Result<Outcome> {
        let outcome = match command {
            BrowseCommand::Nav(target) => Outcome::Moved(self.navigator.nav_click(&target)),
            BrowseCommand::Open(key) => {
                let study = self.resolve(&key)?;
                Outcome::Moved(self.navigator.select_record(study))
            }
            BrowseCommand::Back => Outcome::Moved(self.navigator.back()),
            BrowseCommand::Search(term) => {
                self.filters.set_search(term);
                self.show_grid()
            }
            BrowseCommand::Category(category) => {
                self.filters.set_category(category);
                self.show_grid()
            }
            BrowseCommand::Clear => {
                self.filters.clear();
                self.show_grid()
            }
            BrowseCommand::State => Outcome::Message(serde_json::to_string_pretty(&self.state())?),
            BrowseCommand::Help => Outcome::Message(super::command::HELP.to_string()),
            BrowseCommand::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }

    /// Filters live on the home grid; changing them from elsewhere jumps there.
    fn show_grid(&mut self) -> Outcome {
        if self.navigator.screen() == Screen::Home {
            Outcome::Moved(ScrollRequest::Anchor(
                NavTarget::CASE_STUDIES_ANCHOR.to_string(),
            ))
        } else {
            Outcome::Moved(self.navigator.go(NavTarget::CaseStudies))
        }
    }

    /// A number picks from the grid on screen; anything else is an id or name.
    fn resolve(&self, key: &str) -> anyhow::Result<Arc<CaseStudy>> {
        let Ok(position) = key.parse::<usize>() else {
            return Ok(Arc::clone(self.catalog.find(key)?));
        };

        let screen = self.navigator.screen();
        if !screen.is_listing() {
            anyhow::bail!("no case-study grid on the {screen} screen; use an id or name");
        }
        let grid = if screen == Screen::Trending {
            self.trending()
        } else {
            self.listing().studies
        };

        position
            .checked_sub(1)
            .and_then(|index| grid.get(index))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no case study at position {position} (1-{})", grid.len()))
    }
}

#[cfg(test)]
mod tests {
    use pm_core::enums::Origin;
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn run(session: &mut BrowseSession<'_>, line: &str) -> Outcome {
        let command = BrowseCommand::parse(line).unwrap().unwrap();
        session.execute(command).unwrap()
    }

    #[test]
    fn open_from_trending_returns_to_trending() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "trending");
        assert_eq!(run(&mut session, "open 1"), Outcome::Moved(ScrollRequest::Top));
        assert_eq!(session.navigator().current_study().unwrap().id, "byjus");
        assert_eq!(session.navigator().origin(), Some(Origin::Trending));

        run(&mut session, "back");
        assert_eq!(session.navigator().screen(), Screen::Trending);
    }

    #[test]
    fn open_by_position_uses_filtered_grid() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "category Media");
        run(&mut session, "open 2");
        assert_eq!(session.navigator().current_study().unwrap().name, "MoviePass");
        assert_eq!(session.navigator().origin(), Some(Origin::Home));
    }

    #[test]
    fn open_by_name_from_about_records_home_origin() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "about");
        run(&mut session, "open theranos");
        assert_eq!(session.navigator().origin(), Some(Origin::Home));
        run(&mut session, "back");
        assert_eq!(session.navigator().screen(), Screen::Home);
    }

    #[test]
    fn position_outside_grid_is_an_error() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        let command = BrowseCommand::parse("open 13").unwrap().unwrap();
        assert!(session.execute(command).is_err());
        assert_eq!(session.navigator().screen(), Screen::Home);
    }

    #[test]
    fn position_on_static_page_is_an_error() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "authors");
        let command = BrowseCommand::parse("open 1").unwrap().unwrap();
        assert!(session.execute(command).is_err());
    }

    #[test]
    fn position_on_detail_page_is_an_error() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "open FTX");
        let command = BrowseCommand::parse("open 1").unwrap().unwrap();
        let err = session.execute(command).unwrap_err();
        assert!(err.to_string().contains("case_study screen"));
        assert_eq!(session.navigator().current_study().unwrap().name, "FTX");
    }

    #[test]
    fn open_discarded_trending_entry_by_position() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "trending");
        run(&mut session, "open 5");
        let study = session.navigator().current_study().unwrap();
        assert_eq!(study.id, "ftx");
        assert!(study.is_trending());
        assert_eq!(session.navigator().origin(), Some(Origin::Trending));
    }

    #[test]
    fn search_from_detail_jumps_to_grid() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "open FTX");
        let outcome = run(&mut session, "search fraud");
        assert_eq!(
            outcome,
            Outcome::Moved(ScrollRequest::Anchor("case-studies".into()))
        );
        assert_eq!(session.navigator().screen(), Screen::Home);
        assert!(!session.listing().featured);
    }

    #[test]
    fn clear_restores_featured_grid() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        let featured = session.listing().studies;
        run(&mut session, "search zzzznotfound");
        assert!(session.listing().empty_state.is_some());
        run(&mut session, "clear");
        let restored = session.listing().studies;
        assert_eq!(featured.len(), restored.len());
        assert!(featured.iter().zip(&restored).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn unknown_link_goes_home() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "trending");
        assert_eq!(run(&mut session, "nav pricing"), Outcome::Moved(ScrollRequest::Top));
        assert_eq!(session.navigator().screen(), Screen::Home);
    }

    #[test]
    fn state_serializes_view_model() {
        let catalog = catalog();
        let mut session = BrowseSession::new(&catalog, 12);
        run(&mut session, "category Fintech");
        let Outcome::Message(json) = run(&mut session, "state") else {
            panic!("state should print a message");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["navigator"]["view"]["type"], "home");
        assert_eq!(value["filters"]["active_category"], "Fintech");
    }
}
