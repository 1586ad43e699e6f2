use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Derive the planet and lifeform profile for one record.
    Profile(ProfileArgs),
    /// Show what every pipeline stage decided for one record.
    Evaluate(RecordArgs),
    /// Print or check against a registered JSON Schema.
    Schema(SchemaArgs),
}

/// Where the record comes from. Overrides from `--set` are applied last.
#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    /// JSON object file with the record's fields (`-` for stdin)
    #[arg(long, conflicts_with = "csv")]
    pub record: Option<PathBuf>,

    /// CSV table to pick the record from; `#` lines are skipped
    #[arg(long, requires = "id")]
    pub csv: Option<PathBuf>,

    /// Value of the id column identifying the row
    #[arg(long, requires = "csv")]
    pub id: Option<String>,

    /// Column matched against `--id`
    #[arg(long, default_value = "kepid")]
    pub id_column: String,

    /// Field override, e.g. `--set koi_teq=288` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub input: RecordArgs,

    /// Habitat tag: aquatic, forest, desert, terrestrial
    #[arg(long)]
    pub habitat: Option<String>,

    /// Baseline lifeform size in meters
    #[arg(long)]
    pub base_size: Option<f64>,

    /// Candidate probability from an external classifier, in [0, 1]
    #[arg(long)]
    pub candidate_probability: Option<f64>,

    /// Export the profile to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export to the configured output path when `--output` is not given
    #[arg(long)]
    pub export: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; lists every name when omitted
    pub name: Option<String>,

    /// Validate this JSON file against the named schema instead of printing it
    #[arg(long, requires = "name")]
    pub validate: Option<PathBuf>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field name in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
