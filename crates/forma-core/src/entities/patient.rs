use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BloodGroup, Gender};
use crate::ids::RecordId;

/// Legacy wire name of `diagnosedWith`, still accepted on input.
pub const LEGACY_DIAGNOSIS_FIELD: &str = "diagonistWith";

/// Input shape of a patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    #[serde(alias = "diagonistWith")]
    pub diagnosed_with: String,
    pub address: String,
    /// Age in years; fractional values are allowed.
    #[schemars(range(min = 0))]
    pub age: f64,
    pub blood_group: BloodGroup,
    pub gender: Gender,
    /// Hospital the patient is admitted in, if any.
    #[serde(default)]
    pub admitted_in: Option<RecordId>,
}

impl NewPatient {
    #[must_use]
    pub fn into_record(self, now: DateTime<Utc>) -> Patient {
        Patient {
            name: self.name,
            diagnosed_with: self.diagnosed_with,
            address: self.address,
            age: self.age,
            blood_group: self.blood_group,
            gender: self.gender,
            admitted_in: self.admitted_in,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A normalized patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub name: String,
    pub diagnosed_with: String,
    pub address: String,
    pub age: f64,
    pub blood_group: BloodGroup,
    pub gender: Gender,
    pub admitted_in: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
