//! # forma-schema
//!
//! JSON Schema registry and record shape validation for Forma.
//!
//! This crate provides:
//! - `SchemaRegistry`: named JSON Schemas for every input shape and record
//! - `RecordValidator`: the pure validator turning an untyped mapping into a
//!   normalized [`forma_core::Record`] or a [`forma_core::ValidationError`]
//!
//! ## Architecture
//!
//! Shapes are defined once in `forma-core` with `#[derive(JsonSchema)]`.
//! This crate generates their schemas, validates input with `jsonschema`,
//! and maps every schema error onto a `(field, constraint)` violation.

mod error;
mod normalize;
mod registry;
mod validator;
mod violations;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use validator::RecordValidator;
