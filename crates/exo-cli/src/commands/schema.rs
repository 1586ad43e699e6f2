use anyhow::{Context, bail};
use exo_schema::SchemaRegistry;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `exoprofile schema`.
pub fn handle(
    args: &SchemaArgs,
    schemas: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(name) = args.name.as_deref() else {
        return output(&schemas.list(), flags.format);
    };

    if let Some(path) = &args.validate {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let instance: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        schemas
            .validate(name, &instance)
            .with_context(|| format!("{} does not match schema '{name}'", path.display()))?;
        return output(&json!({ "schema": name, "valid": true }), flags.format);
    }

    match schemas.get(name) {
        Some(schema) => output(schema, flags.format),
        None => bail!(
            "unknown schema '{name}'; available: {}",
            schemas.list().join(", ")
        ),
    }
}
