//! Error types for schema consistency checking.

use thiserror::Error;

/// Errors produced when checking a [crate::schema::Schema] for internal
/// consistency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A field's condition refers to a name that is not a key of the schema.
    #[error("field `{field}` has a condition referencing unknown field `{target}`")]
    UnknownFieldRef { field: String, target: String },
}
