//! Reading validation input from a file or stdin.
//!
//! Accepted shapes:
//! - a single JSON value (one input)
//! - a top-level JSON array (one input per element)
//! - a stream of whitespace-separated values, e.g. JSON Lines

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Read the inputs at `path`, or stdin when `path` is `None` or `-`.
pub fn read_inputs(path: Option<&Path>) -> anyhow::Result<Vec<Value>> {
    let text = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    parse_inputs(&text)
}

/// Split `text` into individual input values.
pub fn parse_inputs(text: &str) -> anyhow::Result<Vec<Value>> {
    let mut values = Vec::new();
    for (position, value) in serde_json::Deserializer::from_str(text)
        .into_iter::<Value>()
        .enumerate()
    {
        let value = value.with_context(|| format!("input value {position} is not valid JSON"))?;
        values.push(value);
    }

    if values.is_empty() {
        anyhow::bail!("no JSON input found");
    }

    // A lone top-level array is a batch; arrays inside a stream stay single inputs.
    if let [Value::Array(_)] = values.as_slice()
        && let Some(Value::Array(items)) = values.pop()
    {
        return Ok(items);
    }

    Ok(values)
}
