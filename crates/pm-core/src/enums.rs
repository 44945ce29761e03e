//! Screen, origin, and navigation-target enums for Postmortem.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Which screen is on display. Exactly one is active at a time.
///
/// ```text
/// home ⇄ trending ⇄ about ⇄ authors      (nav click, any to any)
/// home     → case_study → home           (select, back)
/// trending → case_study → trending       (select, back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Trending,
    About,
    Authors,
    CaseStudy,
}

impl Screen {
    /// Screens that list case studies and can therefore open the detail view.
    #[must_use]
    pub const fn is_listing(self) -> bool {
        matches!(self, Self::Home | Self::Trending)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Trending => "trending",
            Self::About => "about",
            Self::Authors => "authors",
            Self::CaseStudy => "case_study",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// Listing screen the detail view returns to on "back".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    #[default]
    Home,
    Trending,
}

impl Origin {
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::Home => Screen::Home,
            Self::Trending => Screen::Trending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.screen().as_str()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NavTarget
// ---------------------------------------------------------------------------

/// Literal link identifiers used by the navigation bar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NavTarget {
    Home,
    Trending,
    About,
    Authors,
    /// The case-study section of the home page.
    CaseStudies,
}

impl NavTarget {
    /// Anchor id of the case-study section on the home screen.
    pub const CASE_STUDIES_ANCHOR: &'static str = "case-studies";

    /// Resolve a link identifier, matched exactly as given.
    /// Unrecognized identifiers resolve to [`NavTarget::Home`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "trending" => Self::Trending,
            "about" => Self::About,
            "authors" => Self::Authors,
            Self::CASE_STUDIES_ANCHOR => Self::CaseStudies,
            _ => Self::Home,
        }
    }

    /// Screen shown after following this link.
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::Home | Self::CaseStudies => Screen::Home,
            Self::Trending => Screen::Trending,
            Self::About => Screen::About,
            Self::Authors => Screen::Authors,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Trending => "trending",
            Self::About => "about",
            Self::Authors => "authors",
            Self::CaseStudies => Self::CASE_STUDIES_ANCHOR,
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
