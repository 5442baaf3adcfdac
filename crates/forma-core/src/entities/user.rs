use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum password length in characters.
pub const PASSWORD_MIN_LENGTH: u64 = 8;

/// Fields lowercased before a user is validated.
pub const LOWERCASED_FIELDS: [&str; 2] = ["username", "email"];

/// Input shape of a user account in the todo domain.
///
/// `username` is unique in the store; `email` is not. Both are lowercased.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    #[schemars(length(min = 8))]
    pub password: String,
}

impl NewUser {
    /// Apply case normalization and stamp timestamps.
    #[must_use]
    pub fn into_record(self, now: DateTime<Utc>) -> User {
        User {
            username: self.username.to_lowercase(),
            email: self.email.to_lowercase(),
            password: self.password,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A normalized user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
