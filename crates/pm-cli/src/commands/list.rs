use std::fmt::Write;

use pm_core::entities::ALL_CATEGORIES;
use pm_core::responses::ListResponse;
use pm_search::FilterState;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, render_cards};

/// Handle `pm list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(args, ctx, flags.limit)?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_listing(&response, flags.quiet));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

fn build(args: &ListArgs, ctx: &AppContext, limit: Option<u32>) -> anyhow::Result<ListResponse> {
    let state = FilterState::new(
        args.category.as_deref().unwrap_or(ALL_CATEGORIES),
        args.search.clone().unwrap_or_default(),
    );

    let listing = state.apply(ctx.catalog.studies(), ctx.featured_limit());
    let mut response = listing.to_response(&state);

    if let Some(limit) = effective_limit(limit, ctx.config.general.default_limit)? {
        response.results.truncate(limit);
    }

    Ok(response)
}

/// Card grid followed by the empty state or a note about hidden records.
#[must_use]
pub fn render_listing(response: &ListResponse, quiet: bool) -> String {
    if let Some(empty) = &response.empty_state {
        return format!("{}\n{}", empty.message, empty.hint);
    }

    let mut out = render_cards(&response.results);
    if quiet {
        return out;
    }

    if response.hidden > 0 {
        let _ = write!(
            out,
            "\n\nShowing {} featured of {} case studies. Search or pick a category to see the rest.",
            response.results.len(),
            response.total_matches
        );
    } else if response.results.len() < response.total_matches {
        let _ = write!(
            out,
            "\n\nShowing {} of {} matches.",
            response.results.len(),
            response.total_matches
        );
    }
    out
}
