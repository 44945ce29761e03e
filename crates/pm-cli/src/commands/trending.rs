use pm_core::entities::CaseStudySummary;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, render_cards};

/// Handle `pm trending`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut cards: Vec<CaseStudySummary> = ctx
        .catalog
        .trending()
        .iter()
        .map(|study| study.summary_card())
        .collect();

    if let Some(limit) = effective_limit(flags.limit, ctx.config.general.default_limit)? {
        cards.truncate(limit);
    }

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_cards(&cards));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&cards, flags.format),
    }
}
