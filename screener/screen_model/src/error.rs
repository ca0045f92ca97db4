//! Error types for artifact loading and inference

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating a model artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid artifact: {0}")]
    Invalid(String),
    #[error("artifact expects {found} features but the screen supplies {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("feature {index} of the artifact is '{found}' but the screen supplies '{expected}'")]
    FeatureOrder {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Errors raised by a single prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("inference failed: {0}")]
    Inference(String),
}
