//! Schema error types.

use forma_core::ValidationError;
use thiserror::Error;

/// Errors from the schema registry and validator construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
