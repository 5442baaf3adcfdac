//! CLI response types returned as JSON by `forma` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Record;
use crate::enums::RecordKind;
use crate::errors::Violation;

/// Result of validating one input mapping.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid { index: usize, record: Record },
    Invalid { index: usize, violations: Vec<Violation> },
}

impl ValidationOutcome {
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Valid { index, .. } | Self::Invalid { index, .. } => *index,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Response from `forma validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ValidateResponse {
    pub kind: RecordKind,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Whether ids and usernames were checked against a catalog.
    pub references_checked: bool,
    pub results: Vec<ValidationOutcome>,
}

impl ValidateResponse {
    /// Summarize a list of outcomes.
    #[must_use]
    pub fn new(kind: RecordKind, references_checked: bool, results: Vec<ValidationOutcome>) -> Self {
        let valid = results.iter().filter(|r| r.is_valid()).count();
        Self {
            kind,
            total: results.len(),
            valid,
            invalid: results.len() - valid,
            references_checked,
            results,
        }
    }

    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// One row of `forma kinds`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: RecordKind,
    pub collection: String,
    pub input_schema: String,
    pub record_schema: String,
    pub required_fields: Vec<String>,
}
