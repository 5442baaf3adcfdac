//! Input normalization applied before schema validation.

use forma_core::entities::{LEGACY_DIAGNOSIS_FIELD, LOWERCASED_FIELDS};
use forma_core::enums::RecordKind;
use serde_json::Value;

const DIAGNOSIS_FIELD: &str = "diagnosedWith";

/// Return a normalized copy of `input` for `kind`.
///
/// - user: `username` and `email` strings are lowercased
/// - patient: the legacy `diagonistWith` key is folded into `diagnosedWith`
///
/// Non-object input is returned unchanged so the schema reports it.
pub(crate) fn normalize(kind: RecordKind, input: &Value) -> Value {
    let mut value = input.clone();
    let Some(map) = value.as_object_mut() else {
        return value;
    };

    match kind {
        RecordKind::User => {
            for field in LOWERCASED_FIELDS {
                if let Some(Value::String(s)) = map.get_mut(field) {
                    *s = s.to_lowercase();
                }
            }
        }
        RecordKind::Patient => {
            if let Some(legacy) = map.remove(LEGACY_DIAGNOSIS_FIELD) {
                map.entry(DIAGNOSIS_FIELD).or_insert(legacy);
            }
        }
        RecordKind::Order | RecordKind::Todo => {}
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_fields_are_lowercased() {
        let out = normalize(
            RecordKind::User,
            &json!({"username": "AdaL", "email": "ADA@Example.com", "password": "MixedCase"}),
        );
        assert_eq!(out["username"], "adal");
        assert_eq!(out["email"], "ada@example.com");
        assert_eq!(out["password"], "MixedCase");
    }

    #[test]
    fn non_string_user_fields_are_left_for_the_schema() {
        let out = normalize(RecordKind::User, &json!({"username": 42}));
        assert_eq!(out["username"], 42);
    }

    #[test]
    fn legacy_diagnosis_is_renamed() {
        let out = normalize(RecordKind::Patient, &json!({"diagonistWith": "flu"}));
        assert_eq!(out, json!({"diagnosedWith": "flu"}));
    }

    #[test]
    fn canonical_diagnosis_wins_over_legacy() {
        let out = normalize(
            RecordKind::Patient,
            &json!({"diagnosedWith": "asthma", "diagonistWith": "flu"}),
        );
        assert_eq!(out, json!({"diagnosedWith": "asthma"}));
    }

    #[test]
    fn other_kinds_and_non_objects_pass_through() {
        let todo = json!({"content": "Buy Milk"});
        assert_eq!(normalize(RecordKind::Todo, &todo), todo);
        assert_eq!(normalize(RecordKind::User, &json!("x")), json!("x"));
    }
}
