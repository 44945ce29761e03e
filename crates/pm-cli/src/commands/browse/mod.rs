//! `pm browse`: a line-driven session over the site's screens.
//!
//! Each input line is one transition. After every screen change the new
//! screen is printed; anchor scrolls are reported as a one-line note.

mod command;
mod screens;
mod session;

use std::io::{BufRead, Write};

use pm_core::navigation::ScrollRequest;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{self, table::TableOptions};

use command::BrowseCommand;
use screens::render_screen;
use session::{BrowseSession, Outcome};

/// Handle `pm browse`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = output::table_options();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run(ctx, stdin.lock(), &mut stdout, flags.quiet, options)
}

fn run<R: BufRead, W: Write>(
    ctx: &AppContext,
    input: R,
    out: &mut W,
    quiet: bool,
    options: TableOptions,
) -> anyhow::Result<()> {
    let mut session = BrowseSession::new(&ctx.catalog, ctx.featured_limit());

    writeln!(out, "{}", render_screen(&session, options))?;
    if !quiet {
        writeln!(out, "\ntype 'help' for commands")?;
    }

    for line in input.lines() {
        let line = line?;
        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(out, "{error}")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Message(text)) => writeln!(out, "{text}")?,
            Ok(Outcome::Moved(scroll)) => {
                if let ScrollRequest::Anchor(anchor) = &scroll {
                    if !quiet {
                        writeln!(out, "(jumped to #{anchor})")?;
                    }
                }
                writeln!(out, "\n{}", render_screen(&session, options))?;
            }
            Err(error) => {
                tracing::debug!(%error, "browse command rejected");
                writeln!(out, "{error}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn transcript(script: &str) -> String {
        let ctx = AppContext::embedded();
        let mut out = Vec::new();
        run(&ctx, Cursor::new(script), &mut out, false, PLAIN).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn session_walks_through_screens() {
        let text = transcript("trending\nopen 1\nback\nquit\nabout\n");
        assert!(text.contains("Trending now"));
        assert!(text.contains("'back' returns to trending"));
        // Input after quit is never read.
        assert!(!text.contains("About Postmortem"));
    }

    #[test]
    fn bad_input_reports_and_continues() {
        let text = transcript("launch\nopen 99\nauthors\n");
        assert!(text.contains("unknown command 'launch'"));
        assert!(text.contains("no case study at position 99"));
        assert!(text.contains("Jefry Mammen"));
    }

    #[test]
    fn case_studies_link_reports_anchor() {
        let text = transcript("about\nnav case-studies\n");
        assert!(text.contains("(jumped to #case-studies)"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let text = transcript("");
        assert!(text.contains("type 'help' for commands"));
    }
}
