use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List case studies: the featured grid, or every match once filtered.
    List(ListArgs),
    /// Show one case study by id or name.
    Show(ShowArgs),
    /// Case studies flagged as trending.
    Trending,
    /// Filter-bar categories and the categories present in the dataset.
    Categories,
    /// Dataset entries dropped by name deduplication.
    Duplicates,
    /// One-line-per-record context digest of the whole catalog.
    Digest,
    /// Print a registered JSON schema, or list schema names.
    Schema(SchemaArgs),
    /// Interactive line-driven session over the site's screens.
    Browse,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Category from the filter bar ("All" matches everything)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Case-insensitive substring over name, category, status, summary, keywords
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Record id (e.g. "s4") or display name (e.g. "FTX")
    pub key: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list every registered name
    pub name: Option<String>,
}
