use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pm_config::PmConfig;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pm` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pm",
    version,
    about = "Postmortem - an archive of startup failure case studies"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Dataset file to load instead of catalog.path / the embedded dataset
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// A missing `--format` falls back to `general.default_format`.
    pub fn global_flags(&self, config: &PmConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true).map_err(|_| {
                anyhow::anyhow!(
                    "invalid general.default_format '{}': expected json, table, or raw",
                    config.general.default_format
                )
            })?,
        };

        Ok(GlobalFlags {
            format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
        })
    }
}
