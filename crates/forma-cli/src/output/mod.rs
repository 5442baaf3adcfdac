use forma_core::responses::{KindSummary, ValidateResponse, ValidationOutcome};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response that knows how to lay itself out as table rows.
///
/// Responses without a `TableView` fall back to a key/value table of their
/// top-level JSON fields.
pub trait TableView {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
}

impl TableView for ValidateResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["index", "status", "field", "rule", "message"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for outcome in &self.results {
            match outcome {
                ValidationOutcome::Valid { index, .. } => rows.push(vec![
                    index.to_string(),
                    String::from("valid"),
                    String::from("-"),
                    String::from("-"),
                    String::from("-"),
                ]),
                ValidationOutcome::Invalid { index, violations } => {
                    for violation in violations {
                        rows.push(vec![
                            index.to_string(),
                            String::from("invalid"),
                            violation.field.clone(),
                            violation.constraint.to_string(),
                            violation.message.clone(),
                        ]);
                    }
                }
            }
        }
        rows
    }
}

impl TableView for [KindSummary] {
    fn headers(&self) -> Vec<&'static str> {
        vec!["kind", "collection", "input_schema", "record_schema", "required"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|summary| {
                vec![
                    summary.kind.to_string(),
                    summary.collection.clone(),
                    summary.input_schema.clone(),
                    summary.record_schema.clone(),
                    summary.required_fields.join(", "),
                ]
            })
            .collect()
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a response that has its own table layout.
pub fn render_view<T: Serialize + TableView + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let headers = value.headers();
            let rows = value.rows();
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            Ok(table::render(&headers, &rows, table_options()))
        }
        other => render(value, other),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response that has its own table layout.
pub fn output_view<T: Serialize + TableView + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_view(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&headers, &rows, options))
        }
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) => {
            let headers = ["value"];
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            Ok(table::render(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render(&headers, &rows, options))
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
