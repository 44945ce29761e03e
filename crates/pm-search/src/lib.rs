//! # pm-search
//!
//! Filter/search view-model for the Postmortem catalog.
//!
//! Two pure functions carry the listing semantics:
//! - [`filter`] keeps records matching a category AND a case-insensitive
//!   substring, in catalog order.
//! - [`select_displayed`] applies the featured cutoff, but only when the user
//!   has neither searched nor picked a category.
//!
//! [`FilterState`] holds the user's current choices and produces a
//! [`Listing`] with the empty-state message attached when nothing matched.

mod filter;
mod state;

pub use filter::{filter, is_all_categories, matches_search, select_displayed};
pub use state::{FilterState, Listing};
