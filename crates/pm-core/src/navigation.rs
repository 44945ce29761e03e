//! Navigation view-model.
//!
//! [`Navigator`] owns the single source of truth for what is on screen. It
//! changes only through [`Navigator::select_record`], [`Navigator::back`], and
//! [`Navigator::nav_click`]. Every transition returns a [`ScrollRequest`] for
//! the display layer; scrolling is not part of the state.
//!
//! The detail state carries its own [`Origin`], written on every entry, so
//! "back" never returns to a stale listing.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CaseStudy;
use crate::enums::{NavTarget, Origin, Screen};

/// Current screen plus the data it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Home,
    Trending,
    About,
    Authors,
    CaseStudy {
        study: Arc<CaseStudy>,
        origin: Origin,
    },
}

impl ViewState {
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::Trending => Screen::Trending,
            Self::About => Screen::About,
            Self::Authors => Screen::Authors,
            Self::CaseStudy { .. } => Screen::CaseStudy,
        }
    }

    fn from_screen(screen: Screen) -> Self {
        match screen {
            Screen::Trending => Self::Trending,
            Screen::About => Self::About,
            Screen::Authors => Self::Authors,
            Screen::Home | Screen::CaseStudy => Self::Home,
        }
    }
}

/// Viewport request emitted alongside a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "scroll", content = "anchor", rename_all = "snake_case")]
pub enum ScrollRequest {
    Top,
    /// Scroll a named section into view.
    Anchor(String),
}

/// Screen state machine. Starts at [`ViewState::Home`] and has no terminal state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Navigator {
    view: ViewState,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.view.screen()
    }

    /// The record on the detail screen, if that is the current screen.
    #[must_use]
    pub fn current_study(&self) -> Option<&Arc<CaseStudy>> {
        match &self.view {
            ViewState::CaseStudy { study, .. } => Some(study),
            _ => None,
        }
    }

    /// Where "back" will lead from the detail screen.
    #[must_use]
    pub const fn origin(&self) -> Option<Origin> {
        match &self.view {
            ViewState::CaseStudy { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    /// Open the detail screen for `study`.
    ///
    /// The origin is the current listing screen. From About or Authors it is
    /// Home; from another detail screen the existing origin is kept.
    pub fn select_record(&mut self, study: Arc<CaseStudy>) -> ScrollRequest {
        let origin = match &self.view {
            ViewState::Trending => Origin::Trending,
            ViewState::CaseStudy { origin, .. } => *origin,
            ViewState::Home | ViewState::About | ViewState::Authors => Origin::Home,
        };
        self.view = ViewState::CaseStudy { study, origin };
        ScrollRequest::Top
    }

    /// Leave the current screen.
    ///
    /// The detail screen returns to its origin; every other screen returns Home.
    pub fn back(&mut self) -> ScrollRequest {
        self.view = match &self.view {
            ViewState::CaseStudy { origin, .. } => ViewState::from_screen(origin.screen()),
            _ => ViewState::Home,
        };
        ScrollRequest::Top
    }

    /// Follow a link by its literal identifier. Unknown identifiers go Home.
    pub fn nav_click(&mut self, target_id: &str) -> ScrollRequest {
        self.go(NavTarget::from_id(target_id))
    }

    pub fn go(&mut self, target: NavTarget) -> ScrollRequest {
        self.view = ViewState::from_screen(target.screen());
        match target {
            NavTarget::CaseStudies => {
                ScrollRequest::Anchor(NavTarget::CASE_STUDIES_ANCHOR.to_string())
            }
            _ => ScrollRequest::Top,
        }
    }
}
