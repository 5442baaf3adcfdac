//! The record shape validator.
//!
//! Validation is a pure function of `(kind, input, now)`:
//! 1. normalize the mapping (case folding, legacy field names)
//! 2. validate it against the kind's input schema, collecting every violation
//! 3. deserialize into the typed draft, letting serde fill defaults
//! 4. stamp `createdAt`/`updatedAt` with `now`
//!
//! Unknown extra fields are ignored at every step.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use forma_core::entities::{NewOrder, NewPatient, NewTodo, NewUser, Order, Patient, Todo, User};
use forma_core::enums::RecordKind;
use forma_core::errors::ROOT_FIELD;
use forma_core::references::{RecordLookup, check_references};
use forma_core::{Constraint, Record, ValidationError, Violation};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SchemaError;
use crate::normalize::normalize;
use crate::registry::SchemaRegistry;
use crate::violations;

/// Validates raw mappings against the four record shapes.
///
/// Input schemas are compiled once at construction; a validator can be
/// shared and reused for any number of inputs.
pub struct RecordValidator {
    compiled: HashMap<RecordKind, jsonschema::Validator>,
}

impl RecordValidator {
    /// Build a validator with every input schema compiled.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema fails to compile.
    pub fn new() -> Result<Self, SchemaError> {
        let registry = SchemaRegistry::new();
        let mut compiled = HashMap::with_capacity(RecordKind::ALL.len());
        for kind in RecordKind::ALL {
            compiled.insert(kind, registry.compile(kind.input_schema_name())?);
        }
        Ok(Self { compiled })
    }

    /// Validate `input` as a record of `kind`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated constraint.
    pub fn validate(
        &self,
        kind: RecordKind,
        input: &Value,
        now: DateTime<Utc>,
    ) -> Result<Record, ValidationError> {
        match kind {
            RecordKind::Order => self.validate_order(input, now).map(Record::Order),
            RecordKind::Patient => self.validate_patient(input, now).map(Record::Patient),
            RecordKind::Todo => self.validate_todo(input, now).map(Record::Todo),
            RecordKind::User => self.validate_user(input, now).map(Record::User),
        }
    }

    /// Validate `input`, then check its references (and, for users, username
    /// uniqueness) against `lookup`. Shape violations short-circuit: references
    /// are only checked on a well-formed record.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` with shape or reference violations.
    pub fn validate_with_lookup(
        &self,
        kind: RecordKind,
        input: &Value,
        now: DateTime<Utc>,
        lookup: &impl RecordLookup,
    ) -> Result<Record, ValidationError> {
        let record = self.validate(kind, input, now)?;
        let violations = check_references(&record, lookup);
        if !violations.is_empty() {
            tracing::debug!(
                %kind,
                count = violations.len(),
                "record failed reference checks"
            );
        }
        ValidationError::check(violations)?;
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated constraint.
    pub fn validate_order(&self, input: &Value, now: DateTime<Utc>) -> Result<Order, ValidationError> {
        self.validate_draft::<NewOrder>(RecordKind::Order, input)
            .map(|draft| draft.into_record(now))
    }

    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated constraint.
    pub fn validate_patient(
        &self,
        input: &Value,
        now: DateTime<Utc>,
    ) -> Result<Patient, ValidationError> {
        self.validate_draft::<NewPatient>(RecordKind::Patient, input)
            .map(|draft| draft.into_record(now))
    }

    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated constraint.
    pub fn validate_todo(&self, input: &Value, now: DateTime<Utc>) -> Result<Todo, ValidationError> {
        self.validate_draft::<NewTodo>(RecordKind::Todo, input)
            .map(|draft| draft.into_record(now))
    }

    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated constraint.
    pub fn validate_user(&self, input: &Value, now: DateTime<Utc>) -> Result<User, ValidationError> {
        self.validate_draft::<NewUser>(RecordKind::User, input)
            .map(|draft| draft.into_record(now))
    }

    fn validate_draft<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        input: &Value,
    ) -> Result<T, ValidationError> {
        let normalized = normalize(kind, input);
        let found = self
            .compiled
            .get(&kind)
            .map(|validator| violations::collect(validator, &normalized))
            .unwrap_or_default();

        if !found.is_empty() {
            tracing::debug!(%kind, count = found.len(), "record failed shape validation");
        }
        ValidationError::check(found)?;

        // The schema already named every field-level problem; anything left is
        // reported against the whole input.
        serde_json::from_value(normalized).map_err(|e| {
            ValidationError::single(Violation::new(ROOT_FIELD, Constraint::Type, e.to_string()))
        })
    }
}
