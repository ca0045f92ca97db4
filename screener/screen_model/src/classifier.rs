use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Binary output of a screening model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    /// 0: no finding.
    Negative,
    /// 1: positive finding.
    Positive,
}

impl Label {
    pub fn code(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.code()
    }
}

impl TryFrom<u8> for Label {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(ModelError::Inference(format!(
                "model produced label {other}, expected 0 or 1"
            ))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A loaded binary classifier.
///
/// Implementations are immutable after construction and shared across
/// sessions behind an `Arc`.
pub trait Classifier: Send + Sync {
    /// Predicts the label for one feature vector.
    fn predict(&self, features: &[f64]) -> Result<Label, ModelError>;

    /// Number of features the classifier was fitted on.
    fn n_features(&self) -> usize;

    fn name(&self) -> &str;

    /// Estimator family, e.g. `linear_svm`.
    fn backend_name(&self) -> &str;
}
