//! On-disk model artifact format

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Label};
use crate::error::{ArtifactError, ModelError};
use crate::estimator::Estimator;

/// Per-feature standardisation applied before the estimator: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        if self.mean.len() != n_features || self.scale.len() != n_features {
            return Err(ArtifactError::Invalid(format!(
                "scaler has {} means and {} scales for {n_features} features",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ArtifactError::Invalid("scaler mean is not finite".into()));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::Invalid(
                "scaler scale must be finite and non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn transform(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| (v - m) / s)
            .collect()
    }
}

/// A serialized, fitted classifier.
///
/// ```json
/// {
///   "name": "diabetes_svm",
///   "feature_names": ["Pregnancies", "Glucose", "..."],
///   "estimator": { "kind": "linear_svm", "coef": [0.1, 0.03], "intercept": -5.2 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Training column order, when the exporter recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<StandardScaler>,
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// Reads and validates an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        log::debug!("reading model artifact {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let artifact: ModelArtifact = serde_json::from_str(text)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.name.trim().is_empty() {
            return Err(ArtifactError::Invalid("artifact name is empty".into()));
        }
        self.estimator.validate()?;
        let n = self.estimator.n_features();
        if let Some(scaler) = &self.scaler {
            scaler.validate(n)?;
        }
        if let Some(names) = &self.feature_names {
            if names.len() != n {
                return Err(ArtifactError::Invalid(format!(
                    "{} feature names for {n} coefficients",
                    names.len()
                )));
            }
        }
        Ok(())
    }

    /// Verifies the artifact was fitted on `expected` columns, in that order.
    ///
    /// Artifacts without recorded names are only checked for length.
    pub fn check_features(&self, expected: &[&str]) -> Result<(), ArtifactError> {
        let found = self.estimator.n_features();
        if found != expected.len() {
            return Err(ArtifactError::FeatureCount {
                expected: expected.len(),
                found,
            });
        }
        if let Some(names) = &self.feature_names {
            for (index, (want, got)) in expected.iter().zip(names).enumerate() {
                if want != got {
                    return Err(ArtifactError::FeatureOrder {
                        index,
                        expected: want.to_string(),
                        found: got.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<Label, ModelError> {
        let expected = self.estimator.n_features();
        if features.len() != expected {
            return Err(ModelError::ShapeMismatch {
                expected,
                got: features.len(),
            });
        }
        if let Some(i) = features.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::InvalidInput(format!("feature {i} is not finite")));
        }
        let label = match &self.scaler {
            Some(scaler) => self.estimator.decide(&scaler.transform(features)),
            None => self.estimator.decide(features),
        };
        Ok(label)
    }

    fn n_features(&self) -> usize {
        self.estimator.n_features()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &str {
        self.estimator.kind()
    }
}
