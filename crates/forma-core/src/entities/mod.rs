//! Record structs for the four Forma shapes.
//!
//! Each shape has an input-side draft (`NewOrder`, ...) that mirrors what a
//! caller may send, and a normalized record with defaults and timestamps
//! applied. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`;
//! the draft schemas drive validation in `forma-schema`.

mod order;
mod patient;
mod todo;
mod user;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use order::{NewOrder, Order, OrderItem};
pub use patient::{LEGACY_DIAGNOSIS_FIELD, NewPatient, Patient};
pub use todo::{NewTodo, Todo};
pub use user::{LOWERCASED_FIELDS, NewUser, PASSWORD_MIN_LENGTH, User};

use crate::enums::{RecordKind, ReferenceTarget};
use crate::ids::RecordId;

/// A normalized record of any kind, tagged by `kind` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Order(Order),
    Patient(Patient),
    Todo(Todo),
    User(User),
}

/// A single outgoing link from a record to another stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference<'a> {
    /// Dotted path of the referencing field, e.g. `orderItems.1.productId`.
    pub field: String,
    pub target: ReferenceTarget,
    pub id: &'a RecordId,
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Order(_) => RecordKind::Order,
            Self::Patient(_) => RecordKind::Patient,
            Self::Todo(_) => RecordKind::Todo,
            Self::User(_) => RecordKind::User,
        }
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Order(r) => r.created_at,
            Self::Patient(r) => r.created_at,
            Self::Todo(r) => r.created_at,
            Self::User(r) => r.created_at,
        }
    }

    /// Every cross-record reference the record carries, in field order.
    #[must_use]
    pub fn references(&self) -> Vec<Reference<'_>> {
        let mut refs = Vec::new();
        match self {
            Self::Order(order) => {
                if let Some(id) = &order.customer {
                    refs.push(Reference {
                        field: "customer".into(),
                        target: ReferenceTarget::Customer,
                        id,
                    });
                }
                for (i, item) in order.order_items.iter().enumerate() {
                    if let Some(id) = &item.product_id {
                        refs.push(Reference {
                            field: format!("orderItems.{i}.productId"),
                            target: ReferenceTarget::Product,
                            id,
                        });
                    }
                }
            }
            Self::Patient(patient) => {
                if let Some(id) = &patient.admitted_in {
                    refs.push(Reference {
                        field: "admittedIn".into(),
                        target: ReferenceTarget::Hospital,
                        id,
                    });
                }
            }
            Self::Todo(todo) => {
                if let Some(id) = &todo.created_by {
                    refs.push(Reference {
                        field: "createdBy".into(),
                        target: ReferenceTarget::User,
                        id,
                    });
                }
                for (i, id) in todo.sub_todo.iter().enumerate() {
                    refs.push(Reference {
                        field: format!("subTodo.{i}"),
                        target: ReferenceTarget::SubTodo,
                        id,
                    });
                }
            }
            Self::User(_) => {}
        }
        refs
    }
}

impl From<Order> for Record {
    fn from(value: Order) -> Self {
        Self::Order(value)
    }
}

impl From<Patient> for Record {
    fn from(value: Patient) -> Self {
        Self::Patient(value)
    }
}

impl From<Todo> for Record {
    fn from(value: Todo) -> Self {
        Self::Todo(value)
    }
}

impl From<User> for Record {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}
