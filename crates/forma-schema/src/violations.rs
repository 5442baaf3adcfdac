//! Mapping of `jsonschema` errors onto Forma violations.

use std::cmp::Ordering;

use forma_core::errors::ROOT_FIELD;
use forma_core::{Constraint, Violation};
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;

/// Collect every error `validator` reports for `instance`, sorted by field
/// path (array indices numerically) and then by rule.
pub(crate) fn collect(validator: &jsonschema::Validator, instance: &Value) -> Vec<Violation> {
    let mut violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|error| to_violation(&error))
        .collect();
    violations.sort_by(|a, b| {
        compare_fields(&a.field, &b.field)
            .then_with(|| a.constraint.rule().cmp(b.constraint.rule()))
    });
    violations.dedup();
    violations
}

fn to_violation(error: &jsonschema::ValidationError<'_>) -> Violation {
    let field = pointer_to_field(&error.instance_path.to_string());
    let message = error.to_string();

    let (field, constraint) = match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map_or_else(|| property.to_string(), ToString::to_string);
            (join_field(&field, &name), Constraint::Required)
        }
        ValidationErrorKind::Type { .. } => (field, Constraint::Type),
        ValidationErrorKind::Enum { options } => (
            field,
            Constraint::Enum {
                allowed: enum_options(options),
            },
        ),
        ValidationErrorKind::MinLength { limit } => (field, Constraint::MinLength { min: *limit }),
        ValidationErrorKind::Minimum { limit } => (
            field,
            Constraint::Minimum {
                limit: limit.as_f64().unwrap_or_default(),
                exclusive: false,
            },
        ),
        ValidationErrorKind::ExclusiveMinimum { limit } => (
            field,
            Constraint::Minimum {
                limit: limit.as_f64().unwrap_or_default(),
                exclusive: true,
            },
        ),
        ValidationErrorKind::Maximum { limit } => (
            field,
            Constraint::Maximum {
                limit: limit.as_f64().unwrap_or_default(),
            },
        ),
        ValidationErrorKind::Pattern { .. } | ValidationErrorKind::Format { .. } => {
            (field, Constraint::Format)
        }
        _ => (field, Constraint::Invalid),
    };

    Violation::new(field, constraint, message)
}

/// Segment-wise path order: `orderItems.2` sorts before `orderItems.10`.
fn compare_fields(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let order = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                };
                if order != Ordering::Equal {
                    return order;
                }
            }
        }
    }
}

/// `/orderItems/0/quantity` → `orderItems.0.quantity`; empty → `$`.
pub(crate) fn pointer_to_field(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        return ROOT_FIELD.to_string();
    }
    trimmed
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

fn join_field(parent: &str, name: &str) -> String {
    if parent == ROOT_FIELD {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn enum_options(options: &Value) -> Vec<String> {
    options
        .as_array()
        .map(|values| {
            values
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                .collect()
        })
        .unwrap_or_default()
}
