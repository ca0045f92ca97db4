//! Pre-trained classifier artifacts for the risk screens.
//!
//! Artifacts are JSON exports of fitted estimators (linear SVM, logistic
//! regression, decision tree) with an optional standard scaler. They are
//! loaded once at startup into a [`ModelSet`] and shared read-only.

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod model_set;

pub use artifact::{ModelArtifact, StandardScaler};
pub use classifier::{Classifier, Label};
pub use error::{ArtifactError, ModelError};
pub use estimator::{Estimator, TreeNode};
pub use model_set::{ModelPaths, ModelSet, ModelSetError};
