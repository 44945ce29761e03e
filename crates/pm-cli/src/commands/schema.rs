use pm_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `pm schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}'. Available: {}",
            registry.list().join(", ")
        )
    })?;

    // Schemas are nested documents; a key/value table would flatten them.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(schema, format)
}
