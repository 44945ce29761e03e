use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render};

/// Handle `pm duplicates`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.catalog.duplicates_report();

    match flags.format {
        OutputFormat::Table => {
            if !flags.quiet {
                println!(
                    "{} authored, {} unique, {} discarded (first occurrence wins)\n",
                    report.authored,
                    report.unique,
                    report.duplicates.len()
                );
            }
            println!("{}", render(&report.duplicates, flags.format)?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}
