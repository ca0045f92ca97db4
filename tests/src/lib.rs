//! Shared fixtures for the cross-crate tests.

use std::fs;
use std::path::{Path, PathBuf};

use screen_model::ModelPaths;
use screen_schema::Domain;

#[cfg(test)]
mod artifacts;
#[cfg(test)]
mod categories;
#[cfg(test)]
mod invocation;
#[cfg(test)]
mod messages;
#[cfg(test)]
mod vectors;

/// Linear SVM artifact for `domain` that is positive when feature `hot`
/// exceeds `-intercept`. Records the domain's column names.
pub fn linear_artifact(domain: Domain, hot: usize, intercept: f64) -> String {
    let n = domain.feature_len();
    let mut coef = vec![0.0; n];
    coef[hot] = 1.0;
    serde_json::json!({
        "name": format!("{}_fixture", domain.slug()),
        "feature_names": domain.schema().feature_order,
        "estimator": { "kind": "linear_svm", "coef": coef, "intercept": intercept },
    })
    .to_string()
}

/// Writes one fixture artifact per domain into `dir`.
pub fn write_fixture_models(dir: &Path) -> std::io::Result<ModelPaths> {
    let paths = ModelPaths {
        diabetes: dir.join("diabetes.json"),
        heart_disease: dir.join("heart.json"),
        parkinsons: dir.join("parkinsons.json"),
    };
    // glucose > 125, age > 60, PPE > 0.2
    fs::write(&paths.diabetes, linear_artifact(Domain::Diabetes, 1, -125.0))?;
    fs::write(&paths.heart_disease, linear_artifact(Domain::HeartDisease, 0, -60.0))?;
    fs::write(&paths.parkinsons, linear_artifact(Domain::Parkinsons, 21, -0.2))?;
    Ok(paths)
}

/// Paths of the demo artifacts shipped in `models/`.
pub fn bundled_models() -> ModelPaths {
    let mut paths = ModelPaths::default();
    paths.rebase(&workspace_root());
    paths
}

pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}
