use pm_core::responses::CaseStudyDetailResponse;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_detail};

/// Handle `pm show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let study = ctx.catalog.find(&args.key)?;
    let detail = CaseStudyDetailResponse::from(study.as_ref());

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_detail(&detail));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&detail, flags.format),
    }
}
