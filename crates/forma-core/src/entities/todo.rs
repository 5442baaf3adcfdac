use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// Input shape of a todo. Only `content` is required.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub created_by: Option<RecordId>,
    #[serde(default)]
    pub sub_todo: Vec<RecordId>,
}

impl NewTodo {
    #[must_use]
    pub fn into_record(self, now: DateTime<Utc>) -> Todo {
        Todo {
            content: self.content,
            complete: self.complete,
            created_by: self.created_by,
            sub_todo: self.sub_todo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A normalized todo. `sub_todo` holds references, never embedded records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub content: String,
    pub complete: bool,
    pub created_by: Option<RecordId>,
    pub sub_todo: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
