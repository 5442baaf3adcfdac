//! Validation and cross-cutting error types for Forma.
//!
//! `ValidationError` is the single validation taxonomy: one error carrying
//! every violated constraint as a `(field, constraint)` pair. Schema and
//! config errors live in their own crates; the CLI converges them through
//! `anyhow`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::ReferenceTarget;

/// Field path reported for violations on the input mapping itself.
pub const ROOT_FIELD: &str = "$";

/// The rule a field failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Constraint {
    /// A required field is absent.
    Required,
    /// The value has the wrong JSON type.
    Type,
    /// The value is outside the enumerated set.
    Enum { allowed: Vec<String> },
    /// A string is shorter than its declared minimum.
    MinLength { min: u64 },
    /// A number is below its minimum (or not above it, when exclusive).
    Minimum { limit: f64, exclusive: bool },
    /// A number is above its maximum.
    Maximum { limit: f64 },
    /// A string does not match its declared format (record ids).
    Format,
    /// A reference points at a record the store does not know.
    Reference { target: ReferenceTarget },
    /// The value is already taken in the store.
    Unique,
    /// Any other schema rejection.
    Invalid,
}

impl Constraint {
    /// Short rule name, matching the `rule` tag on the wire.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::Enum { .. } => "enum",
            Self::MinLength { .. } => "min_length",
            Self::Minimum { .. } => "minimum",
            Self::Maximum { .. } => "maximum",
            Self::Format => "format",
            Self::Reference { .. } => "reference",
            Self::Unique => "unique",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum { allowed } => write!(f, "enum [{}]", allowed.join(", ")),
            Self::MinLength { min } => write!(f, "min_length {min}"),
            Self::Minimum {
                limit,
                exclusive: true,
            } => write!(f, "minimum > {limit}"),
            Self::Minimum { limit, .. } => write!(f, "minimum >= {limit}"),
            Self::Maximum { limit } => write!(f, "maximum <= {limit}"),
            Self::Reference { target } => write!(f, "reference to {target}"),
            other => f.write_str(other.rule()),
        }
    }
}

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// Dotted camelCase path, e.g. `orderItems.0.quantity`; `$` for the root.
    pub field: String,
    pub constraint: Constraint,
    /// Human-readable detail from the validator.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.constraint, self.message)
    }
}

/// Every constraint an input mapping violated. Never empty.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, JsonSchema)]
#[error("validation failed with {} violation(s): {}", .violations.len(), join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Turn a collected violation list into a result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `violations` is non-empty.
    pub fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// Error with a single violation.
    #[must_use]
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Distinct field paths named by the violations, in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.violations.len());
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(violation.field.as_str());
            }
        }
        fields
    }

    /// Violations reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

/// Errors that can be raised by any Forma crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed one or more shape constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record id was not 24 hexadecimal characters.
    #[error("Invalid record id '{0}': expected 24 hexadecimal characters")]
    InvalidId(String),

    /// A record kind name did not match any known shape.
    #[error("Unknown record kind '{0}' (expected one of: order, patient, todo, user)")]
    UnknownKind(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(field: &str) -> Violation {
        Violation::new(field, Constraint::Required, format!("\"{field}\" is a required property"))
    }

    #[test]
    fn check_empty_is_ok() {
        assert!(ValidationError::check(Vec::new()).is_ok());
    }

    #[test]
    fn check_non_empty_keeps_order() {
        let err = ValidationError::check(vec![required("name"), required("age")]).unwrap_err();
        assert_eq!(err.fields(), vec!["name", "age"]);
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn fields_are_deduplicated() {
        let err = ValidationError::check(vec![
            required("password"),
            Violation::new("password", Constraint::MinLength { min: 8 }, "too short"),
        ])
        .unwrap_err();
        assert_eq!(err.fields(), vec!["password"]);
        assert_eq!(err.for_field("password").count(), 2);
    }

    #[test]
    fn display_lists_every_violation() {
        let err = ValidationError::check(vec![
            required("content"),
            Violation::new(
                "status",
                Constraint::Enum {
                    allowed: vec!["PENDING".into(), "CANCELLED".into()],
                },
                "bad",
            ),
        ])
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("content: required"));
        assert!(text.contains("status: enum [PENDING, CANCELLED]"));
    }

    #[test]
    fn constraint_serializes_with_rule_tag() {
        let json = serde_json::to_value(Constraint::MinLength { min: 8 }).unwrap();
        assert_eq!(json, serde_json::json!({"rule": "min_length", "min": 8}));
        let json = serde_json::to_value(Constraint::Required).unwrap();
        assert_eq!(json, serde_json::json!({"rule": "required"}));
    }

    #[test]
    fn constraint_display_minimum() {
        let exclusive = Constraint::Minimum {
            limit: 0.0,
            exclusive: true,
        };
        let inclusive = Constraint::Minimum {
            limit: 1.0,
            exclusive: false,
        };
        assert_eq!(exclusive.to_string(), "minimum > 0");
        assert_eq!(inclusive.to_string(), "minimum >= 1");
    }

    #[test]
    fn constraint_display_maximum() {
        let max = Constraint::Maximum {
            limit: f64::from(u32::MAX),
        };
        assert_eq!(max.to_string(), "maximum <= 4294967295");
        assert_eq!(max.rule(), "maximum");
    }

    #[test]
    fn core_error_wraps_validation_transparently() {
        let inner = ValidationError::single(required("address"));
        let message = inner.to_string();
        let err = CoreError::from(inner);
        assert_eq!(err.to_string(), message);
    }
}
