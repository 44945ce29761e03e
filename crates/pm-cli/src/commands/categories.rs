use pm_core::responses::CategoriesResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pm categories`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(ctx), flags.format)
}

fn build(ctx: &AppContext) -> CategoriesResponse {
    let present = ctx.catalog.categories();

    for configured in ctx.config.catalog.categories.iter().skip(1) {
        if !present.iter().any(|c| c.eq_ignore_ascii_case(configured)) {
            tracing::debug!(category = %configured, "filter-bar category has no records");
        }
    }

    CategoriesResponse {
        filter_bar: ctx.config.catalog.categories.clone(),
        present: present.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_bar_starts_with_all() {
        let response = build(&AppContext::embedded());
        assert_eq!(response.filter_bar.first().map(String::as_str), Some("All"));
        assert!(response.present.iter().any(|c| c == "Fintech"));
        assert!(!response.present.iter().any(|c| c == "All"));
    }
}
