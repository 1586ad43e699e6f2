use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become `key | value` rows with nested keys joined by dots, so
/// `parameters.lifeform.size` gets its own row. Arrays of scalars stay in
/// one cell.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Object(_) => {
            let mut rows = Vec::new();
            flatten_into(&mut rows, String::new(), &value);
            table::render_table(&["key", "value"], &rows, options)
        }
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            table::render_table(&["value"], &rows, options)
        }
        scalar => table::render_table(&["value"], &[vec![value_to_cell(&scalar)]], options),
    };
    Ok(rendered)
}

/// Depth-first, in key order.
fn flatten_into(rows: &mut Vec<Vec<String>>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(rows, path, child);
            }
        }
        leaf => rows.push(vec![prefix, value_to_cell(leaf)]),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        // Multi-line narratives collapse onto one row.
        Value::String(v) => v
            .lines()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" / "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_flattens_nested_objects() {
        let value = json!({
            "text_description": "This planet is not habitable.\nEnvironment: Hot Jupiter",
            "parameters": {
                "exoplanet": { "habitable": false, "environment": "Hot Jupiter" },
                "lifeform": { "size": null, "coloration": null }
            }
        });
        let out = render(&value, OutputFormat::Table).expect("table render should work");

        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("parameters.exoplanet.environment"));
        assert!(out.contains("parameters.lifeform.coloration"));
        assert!(out.contains("This planet is not habitable. / Environment: Hot Jupiter"));
        assert!(!out.contains("\"exoplanet\""));
    }

    #[test]
    fn table_render_keeps_arrays_in_one_cell() {
        let value = json!({ "coloration": [177, 100, 50] });
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("[177,100,50]"));
    }

    #[test]
    fn table_render_lists_array_items() {
        let out = render(&vec!["profile", "record"], OutputFormat::Table)
            .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("profile"));
    }
}
