//! Error types for form fields.

use thiserror::Error;

/// Errors raised at the edges of the field views.
///
/// Rendering itself never fails; these only come from parsing submitted
/// data, applying changes to a [`FormState`](crate::FormState), and
/// loading themes.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A submitted value could not be interpreted for the field.
    #[error("invalid value for field {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// A change carried a value of a different kind than the field holds.
    #[error("type mismatch for field {field}: expected a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// Theme JSON could not be parsed.
    #[error("invalid theme: {0}")]
    Theme(#[from] serde_json::Error),
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
