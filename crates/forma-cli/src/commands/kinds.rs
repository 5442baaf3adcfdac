use forma_core::enums::RecordKind;
use forma_core::responses::KindSummary;
use forma_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::output::output_view;

/// Handle `forma kinds`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = summaries(&SchemaRegistry::new());
    output_view(summaries.as_slice(), flags.format)
}

fn summaries(registry: &SchemaRegistry) -> Vec<KindSummary> {
    RecordKind::ALL
        .into_iter()
        .map(|kind| KindSummary {
            kind,
            collection: kind.collection_name().to_string(),
            input_schema: kind.input_schema_name().to_string(),
            record_schema: kind.record_schema_name().to_string(),
            required_fields: required_fields(registry, kind),
        })
        .collect()
}

fn required_fields(registry: &SchemaRegistry, kind: RecordKind) -> Vec<String> {
    let mut fields: Vec<String> = registry
        .get(kind.input_schema_name())
        .and_then(|schema| schema.get("required"))
        .and_then(serde_json::Value::as_array)
        .map(|required| {
            required
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    fields.sort();
    fields
}
