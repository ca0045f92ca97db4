//! Startup loading of the per-screen models

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use screen_schema::Domain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::ModelArtifact;
use crate::classifier::Classifier;
use crate::error::ArtifactError;

/// Filesystem location of each screen's artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelPaths {
    pub diabetes: PathBuf,
    pub heart_disease: PathBuf,
    pub parkinsons: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            diabetes: PathBuf::from("models/diabetes_model.json"),
            heart_disease: PathBuf::from("models/heart_disease_model.json"),
            parkinsons: PathBuf::from("models/parkinsons_model.json"),
        }
    }
}

impl ModelPaths {
    pub fn get(&self, domain: Domain) -> &Path {
        match domain {
            Domain::Diabetes => &self.diabetes,
            Domain::HeartDisease => &self.heart_disease,
            Domain::Parkinsons => &self.parkinsons,
        }
    }

    pub fn set(&mut self, domain: Domain, path: PathBuf) {
        match domain {
            Domain::Diabetes => self.diabetes = path,
            Domain::HeartDisease => self.heart_disease = path,
            Domain::Parkinsons => self.parkinsons = path,
        }
    }

    /// Resolves relative paths against `base`.
    pub fn rebase(&mut self, base: &Path) {
        for domain in Domain::ALL {
            let path = self.get(domain);
            if path.is_relative() {
                let joined = base.join(path);
                self.set(domain, joined);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelSetError {
    #[error("could not load the {domain} model from '{}': {source}", path.display())]
    Load {
        domain: Domain,
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
    #[error("the {domain} classifier takes {found} features but the screen supplies {expected}")]
    FeatureCount {
        domain: Domain,
        expected: usize,
        found: usize,
    },
}

/// Immutable set of loaded classifiers, one per screen.
#[derive(Clone, Default)]
pub struct ModelSet {
    models: BTreeMap<Domain, Arc<dyn Classifier>>,
}

impl std::fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.models.iter().map(|(d, m)| (d.slug(), m.name())))
            .finish()
    }
}

impl ModelSet {
    /// Loads all three artifacts. Any failure is fatal and names the artifact.
    pub fn load(paths: &ModelPaths) -> Result<Self, ModelSetError> {
        let mut set = ModelSet::default();
        for domain in Domain::ALL {
            let path = paths.get(domain);
            let artifact = load_checked(domain, path).map_err(|source| ModelSetError::Load {
                domain,
                path: path.to_path_buf(),
                source,
            })?;
            log::info!(
                "loaded {domain} model '{}' ({}, {} features) from {}",
                artifact.name,
                artifact.estimator.kind(),
                artifact.estimator.n_features(),
                path.display()
            );
            set.models.insert(domain, Arc::new(artifact));
        }
        Ok(set)
    }

    /// Registers a classifier for `domain`, replacing any previous one.
    pub fn insert(
        &mut self,
        domain: Domain,
        classifier: Arc<dyn Classifier>,
    ) -> Result<(), ModelSetError> {
        let expected = domain.feature_len();
        let found = classifier.n_features();
        if found != expected {
            return Err(ModelSetError::FeatureCount {
                domain,
                expected,
                found,
            });
        }
        self.models.insert(domain, classifier);
        Ok(())
    }

    pub fn get(&self, domain: Domain) -> Option<&dyn Classifier> {
        self.models.get(&domain).map(|m| m.as_ref())
    }

    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.models.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn load_checked(domain: Domain, path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let artifact = ModelArtifact::load(path)?;
    artifact.check_features(domain.schema().feature_order)?;
    Ok(artifact)
}
