//! Error taxonomy of the model-loading boundary.
use crate::numeric::NumericError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// The exponent field of a power formula was neither a number nor the
    /// name of an earlier node.
    #[error("Power must be a number, got {found}")]
    TypeMismatch { found: String },

    #[error("unsupported operation: '{0}'")]
    UnknownOperation(String),

    #[error("formula references unknown node '{0}'")]
    UnknownName(String),

    #[error("duplicate node name '{0}'")]
    DuplicateName(String),

    #[error("operation '{op}' expects {expected} arguments, got {found}")]
    Arity { op: String, expected: usize, found: usize },

    #[error("formula '{name}' is missing its '{field}' field")]
    MissingField { name: String, field: &'static str },

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
