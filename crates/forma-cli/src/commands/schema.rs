use anyhow::bail;
use forma_core::enums::RecordKind;
use forma_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `forma schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    if args.list {
        return output(&registry.list(), flags.format);
    }

    let Some(name) = args.name.as_deref() else {
        bail!("a schema name is required (or pass --list)");
    };

    match resolve(&registry, name) {
        Some(schema) => output(schema, flags.format),
        None => bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}

/// Exact registry names win; otherwise a kind or collection name selects
/// that kind's input schema.
fn resolve<'a>(registry: &'a SchemaRegistry, name: &str) -> Option<&'a serde_json::Value> {
    registry.get(name).or_else(|| {
        name.parse::<RecordKind>()
            .ok()
            .and_then(|kind| registry.get(kind.input_schema_name()))
    })
}

#[cfg(test)]
mod tests {
    use forma_schema::SchemaRegistry;

    use super::resolve;

    #[test]
    fn exact_name_resolves() {
        let registry = SchemaRegistry::new();
        let schema = resolve(&registry, "order").unwrap();
        assert!(schema["properties"].get("createdAt").is_some());
    }

    #[test]
    fn collection_name_maps_to_input_schema() {
        let registry = SchemaRegistry::new();
        let schema = resolve(&registry, "Orders").unwrap();
        assert_eq!(Some(schema), registry.get("order_input"));
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(resolve(&SchemaRegistry::new(), "hospital").is_none());
    }
}
