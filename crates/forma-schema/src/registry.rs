//! Central schema registry for all Forma shapes.
//!
//! The `SchemaRegistry` builds JSON Schemas from forma-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use forma_core::ValidationError;
use forma_core::enums::RecordKind;
use schemars::schema_for;

use crate::error::SchemaError;
use crate::violations;

/// Central store of all JSON Schemas in the Forma system.
///
/// Holds one input (draft) schema and one normalized-record schema per
/// [`RecordKind`], plus the tagged `record` union, the `validation_error`
/// report shape, and the CLI responses.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every input, record, and report
    /// schema from forma-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        use forma_core::entities::{
            NewOrder, NewPatient, NewTodo, NewUser, Order, Patient, Record, Todo, User,
        };

        let mut schemas = HashMap::new();

        // --- Input shapes (4) ---
        register!(schemas, RecordKind::Order.input_schema_name(), NewOrder);
        register!(schemas, RecordKind::Patient.input_schema_name(), NewPatient);
        register!(schemas, RecordKind::Todo.input_schema_name(), NewTodo);
        register!(schemas, RecordKind::User.input_schema_name(), NewUser);

        // --- Normalized records (4) ---
        register!(schemas, RecordKind::Order.record_schema_name(), Order);
        register!(schemas, RecordKind::Patient.record_schema_name(), Patient);
        register!(schemas, RecordKind::Todo.record_schema_name(), Todo);
        register!(schemas, RecordKind::User.record_schema_name(), User);

        // --- Envelopes (2) ---
        register!(schemas, "record", Record);
        register!(schemas, "validation_error", ValidationError);

        // --- CLI response types (2) ---
        register!(
            schemas,
            "validate_response",
            forma_core::responses::ValidateResponse
        );
        register!(schemas, "kind_summary", forma_core::responses::KindSummary);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Compile a named schema into a reusable validator.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn compile(&self, name: &str) -> Result<jsonschema::Validator, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        jsonschema::validator_for(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Invalid` carrying every violation found.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self.compile(name)?;
        ValidationError::check(violations::collect(&validator, instance))?;
        Ok(())
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forma_core::Constraint;
    use forma_core::entities::{NewTodo, Record};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        let reg = registry();
        // 4 inputs + 4 records + 2 envelopes + 2 responses = 12
        assert_eq!(reg.schema_count(), 12);
    }

    #[test]
    fn registry_list_is_sorted() {
        let reg = registry();
        let names = reg.list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn all_expected_schemas_present() {
        let reg = registry();
        for kind in RecordKind::ALL {
            assert!(reg.get(kind.input_schema_name()).is_some(), "missing {kind} input");
            assert!(reg.get(kind.record_schema_name()).is_some(), "missing {kind} record");
        }
        assert!(reg.get("record").is_some());
        assert!(reg.get("validation_error").is_some());
        assert!(reg.get("validate_response").is_some());
        assert!(reg.get("kind_summary").is_some());
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("hospital").is_none());
    }

    #[test]
    fn validate_valid_record() {
        let reg = registry();
        let record = Record::Todo(
            NewTodo {
                content: "buy milk".into(),
                complete: false,
                created_by: None,
                sub_todo: Vec::new(),
            }
            .into_record(Utc::now()),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert!(reg.validate("record", &json).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_enum_with_violation() {
        let reg = registry();
        let invalid = serde_json::json!({
            "orderPrice": 10,
            "address": "1 Main St",
            "status": "SHIPPED"
        });
        let Err(SchemaError::Invalid(err)) = reg.validate("order_input", &invalid) else {
            panic!("Expected Invalid");
        };
        assert_eq!(err.fields(), vec!["status"]);
        assert!(matches!(
            err.violations()[0].constraint,
            Constraint::Enum { .. }
        ));
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let reg = registry();
        let result = reg.validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn every_schema_compiles() {
        let reg = registry();
        for name in reg.list() {
            assert!(reg.compile(name).is_ok(), "schema {name} failed to compile");
        }
    }
}
