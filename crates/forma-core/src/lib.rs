//! # forma-core
//!
//! Core record types, identifiers, and error types for Forma.
//!
//! This crate provides the foundational types shared across all Forma crates:
//! - Record structs for the four shapes (order, patient, todo, user) and their
//!   input-side drafts
//! - Enumerated field types with their wire spellings
//! - The opaque `RecordId` used for cross-record references
//! - The `ValidationError` taxonomy and cross-cutting `CoreError`
//! - The `RecordLookup` seam to an external store for reference checks
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod references;
pub mod responses;

pub use entities::Record;
pub use errors::{Constraint, CoreError, ValidationError, Violation};
pub use ids::RecordId;
