//! Reference and uniqueness checks against an external store.
//!
//! Referential integrity and username uniqueness belong to the store, not to
//! the pure validator. `RecordLookup` is the capability the store exposes;
//! `check_references` turns dangling links and taken usernames into
//! ordinary [`Violation`]s so callers can report them alongside shape errors.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::entities::Record;
use crate::enums::ReferenceTarget;
use crate::errors::{Constraint, Violation};
use crate::ids::RecordId;

/// Existence lookups exposed by the store that owns the records.
pub trait RecordLookup {
    /// Whether a record of kind `target` with `id` exists.
    fn contains(&self, target: ReferenceTarget, id: &RecordId) -> bool;

    /// Whether `username` (already lowercased) belongs to an existing user.
    fn username_taken(&self, username: &str) -> bool;
}

impl<T: RecordLookup + ?Sized> RecordLookup for &T {
    fn contains(&self, target: ReferenceTarget, id: &RecordId) -> bool {
        (**self).contains(target, id)
    }

    fn username_taken(&self, username: &str) -> bool {
        (**self).username_taken(username)
    }
}

/// Check every reference on `record` and, for users, username uniqueness.
///
/// Email uniqueness is deliberately not checked: the user shape declares it
/// non-unique.
#[must_use]
pub fn check_references(record: &Record, lookup: &impl RecordLookup) -> Vec<Violation> {
    let mut violations: Vec<Violation> = record
        .references()
        .into_iter()
        .filter(|r| !lookup.contains(r.target, r.id))
        .map(|r| {
            Violation::new(
                r.field,
                Constraint::Reference { target: r.target },
                format!("no {} with id {}", r.target, r.id),
            )
        })
        .collect();

    if let Record::User(user) = record {
        if lookup.username_taken(&user.username) {
            violations.push(Violation::new(
                "username",
                Constraint::Unique,
                format!("username '{}' is already taken", user.username),
            ));
        }
    }

    violations
}

/// A snapshot of known ids and usernames, e.g. exported from the store.
///
/// ```json
/// { "ids": { "product": ["65a1..."], "user": [] }, "usernames": ["ada"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub ids: BTreeMap<ReferenceTarget, BTreeSet<RecordId>>,
    #[serde(default)]
    pub usernames: BTreeSet<String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` exists as a `target`.
    pub fn insert(&mut self, target: ReferenceTarget, id: RecordId) {
        self.ids.entry(target).or_default().insert(id);
    }

    /// Record a taken username. Stored lowercased, as the user shape does.
    pub fn insert_username(&mut self, username: &str) {
        self.usernames.insert(username.to_lowercase());
    }

    /// Total number of known ids across all targets.
    #[must_use]
    pub fn id_count(&self) -> usize {
        self.ids.values().map(BTreeSet::len).sum()
    }
}

impl RecordLookup for Catalog {
    fn contains(&self, target: ReferenceTarget, id: &RecordId) -> bool {
        self.ids.get(&target).is_some_and(|set| set.contains(id))
    }

    fn username_taken(&self, username: &str) -> bool {
        self.usernames.contains(username)
    }
}
