//! Serde roundtrip and JsonSchema validation tests for the record types.

use chrono::{TimeZone, Utc};
use forma_core::entities::*;
use forma_core::enums::*;
use forma_core::errors::{Constraint, Violation};
use forma_core::RecordId;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn id(raw: &str) -> RecordId {
    RecordId::parse(raw).unwrap()
}

fn stamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap()
}

roundtrip_and_validate!(
    order_roundtrip,
    Order,
    Order {
        order_price: 250.5,
        customer: Some(id("65a1b2c3d4e5f60718293a4b")),
        order_items: vec![OrderItem {
            product_id: Some(id("65a1b2c3d4e5f60718293a4c")),
            quantity: 2,
        }],
        address: "1 Main St".into(),
        status: OrderStatus::Delivered,
        created_at: stamp(),
        updated_at: stamp(),
    }
);

roundtrip_and_validate!(
    patient_roundtrip,
    Patient,
    Patient {
        name: "Ada Lovelace".into(),
        diagnosed_with: "Seasonal influenza".into(),
        address: "12 St James's Sq".into(),
        age: 36.5,
        blood_group: BloodGroup::AbPositive,
        gender: Gender::Female,
        admitted_in: None,
        created_at: stamp(),
        updated_at: stamp(),
    }
);

roundtrip_and_validate!(
    todo_roundtrip,
    Todo,
    Todo {
        content: "buy milk".into(),
        complete: false,
        created_by: Some(id("0123456789abcdef01234567")),
        sub_todo: vec![id("0123456789abcdef01234568")],
        created_at: stamp(),
        updated_at: stamp(),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        username: "ada".into(),
        email: "ada@example.com".into(),
        password: "correct-horse".into(),
        created_at: stamp(),
        updated_at: stamp(),
    }
);

roundtrip_and_validate!(
    record_roundtrip,
    Record,
    Record::User(User {
        username: "grace".into(),
        email: "grace@example.com".into(),
        password: "hopper1906".into(),
        created_at: stamp(),
        updated_at: stamp(),
    })
);

roundtrip_and_validate!(
    violation_roundtrip,
    Violation,
    Violation::new(
        "status",
        Constraint::Enum {
            allowed: vec!["PENDING".into(), "CANCELLED".into(), "DELIVERED".into()],
        },
        "\"SHIPPED\" is not one of [\"PENDING\",\"CANCELLED\",\"DELIVERED\"]",
    )
);

#[test]
fn record_schema_rejects_mismatched_kind_payload() {
    let schema = serde_json::to_value(schema_for!(Record)).unwrap();
    let instance = serde_json::json!({
        "kind": "order",
        "content": "not an order",
        "complete": false
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn draft_schemas_mark_only_required_fields() {
    let required = |schema: serde_json::Value| -> Vec<String> {
        let mut names: Vec<String> = schema["required"]
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    };

    assert_eq!(
        required(serde_json::to_value(schema_for!(NewOrder)).unwrap()),
        vec!["address", "orderPrice"]
    );
    assert_eq!(
        required(serde_json::to_value(schema_for!(NewPatient)).unwrap()),
        vec!["address", "age", "bloodGroup", "diagnosedWith", "gender", "name"]
    );
    assert_eq!(
        required(serde_json::to_value(schema_for!(NewTodo)).unwrap()),
        vec!["content"]
    );
    assert_eq!(
        required(serde_json::to_value(schema_for!(NewUser)).unwrap()),
        vec!["email", "password", "username"]
    );
}
