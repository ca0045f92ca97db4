use screen_model::ModelError;
use screen_schema::{Domain, Mode, SchemaError};
use thiserror::Error;

/// Errors raised while collecting a form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("{field} is not editable in {mode} mode")]
    NotEditable { field: &'static str, mode: Mode },
    #[error("{field} was given more than once")]
    Duplicate { field: &'static str },
    #[error("no value collected for model feature '{column}'")]
    MissingFeature { column: &'static str },
}

/// Any failure of a single assessment. Always reported to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("no model is loaded for the {0} screen")]
    MissingModel(Domain),
}
