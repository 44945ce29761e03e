use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `pm digest`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Json => output(&ctx.catalog.digest_response(), flags.format),
        OutputFormat::Table | OutputFormat::Raw => {
            println!("{}", ctx.catalog.digest());
            Ok(())
        }
    }
}
