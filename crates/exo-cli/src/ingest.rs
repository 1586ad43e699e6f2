//! Build a [`Record`] from CLI inputs.
//!
//! Sources, applied in order: a JSON object (`--record`, `-` for stdin) or a
//! CSV row (`--csv` + `--id`), then `--set` overrides. With no source at all
//! the record starts empty and every attribute falls back to its default.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use exo_core::{FieldValue, Record};
use exo_schema::SchemaRegistry;

use crate::cli::root_commands::RecordArgs;

pub fn load_record(args: &RecordArgs, schemas: &SchemaRegistry) -> anyhow::Result<Record> {
    let mut record = match (&args.record, &args.csv, &args.id) {
        (Some(path), _, _) => read_json(path, schemas)?,
        (None, Some(path), Some(id)) => read_csv(path, &args.id_column, id)?,
        _ => Record::new(),
    };

    for (key, value) in &args.set {
        record.insert(key.clone(), cell_value(value));
    }

    tracing::debug!(fields = record.len(), "record loaded");
    Ok(record)
}

fn read_json(path: &Path, schemas: &SchemaRegistry) -> anyhow::Result<Record> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read record from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record file {}", path.display()))?
    };

    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("record {} is not valid JSON", path.display()))?;
    schemas
        .validate("record", &value)
        .with_context(|| format!("record {} must be a flat JSON object", path.display()))?;

    Ok(serde_json::from_value(value)?)
}

/// First row whose `id_column` cell equals `id`. Lines starting with `#` are
/// skipped, as in the published exoplanet archive exports.
fn read_csv(path: &Path, id_column: &str, id: &str) -> anyhow::Result<Record> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open CSV {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV header of {}", path.display()))?
        .clone();
    let Some(column) = headers.iter().position(|header| header == id_column) else {
        bail!("CSV {} has no '{id_column}' column", path.display());
    };

    for row in reader.records() {
        let row = row.with_context(|| format!("malformed row in {}", path.display()))?;
        if row.get(column).is_some_and(|cell| same_id(cell, id)) {
            return Ok(headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    (header, row.get(index).map_or(FieldValue::Null, cell_value))
                })
                .collect());
        }
    }

    bail!("no row with {id_column} = {id} in {}", path.display())
}

/// Ids match as text, or as numbers so `10797460` finds `10797460.0`.
#[allow(clippy::float_cmp)]
fn same_id(cell: &str, id: &str) -> bool {
    let id = id.trim();
    cell == id
        || matches!(
            (cell.parse::<f64>(), id.parse::<f64>()),
            (Ok(a), Ok(b)) if a == b
        )
}

/// Empty cells are null; numeric cells become numbers; anything else is text.
fn cell_value(raw: &str) -> FieldValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return FieldValue::Null;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .map_or_else(|| FieldValue::from(raw), FieldValue::Number)
}
