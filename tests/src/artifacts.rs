use std::sync::Once;

use approx::assert_abs_diff_eq;
use screen_form::{assess, FormInput};
use screen_model::{ArtifactError, Estimator, ModelArtifact, ModelSet, ModelSetError};
use screen_schema::{Domain, Mode};

use crate::{bundled_models, linear_artifact, write_fixture_models};

static INIT: Once = Once::new();
fn setup_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[test]
fn bundled_models_load_and_predict() {
    setup_test_logger();
    let models = ModelSet::load(&bundled_models()).unwrap();
    assert_eq!(models.len(), 3);
    for domain in Domain::ALL {
        let assessment = assess(&models, domain, Mode::Normal, &FormInput::new());
        log::debug!("{domain}: {}", assessment.outcome);
        assert!(assessment.predicted(), "{domain}: {}", assessment.outcome);
    }
}

#[test]
fn bundled_diabetes_scaler_standardises() {
    let artifact = ModelArtifact::load(bundled_models().diabetes).unwrap();
    let scaler = artifact.scaler.as_ref().unwrap();
    let scaled = scaler.transform(&scaler.mean);
    for v in scaled {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }
    let shifted: Vec<f64> = scaler
        .mean
        .iter()
        .zip(&scaler.scale)
        .map(|(m, s)| m + s)
        .collect();
    for v in scaler.transform(&shifted) {
        assert_abs_diff_eq!(v, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn bundled_kinds() {
    let paths = bundled_models();
    let kinds: Vec<&str> = Domain::ALL
        .iter()
        .map(|d| ModelArtifact::load(paths.get(*d)).unwrap().estimator.kind())
        .collect();
    assert_eq!(kinds, vec!["linear_svm", "logistic_regression", "decision_tree"]);
}

#[test]
fn swapped_column_order_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture_models(dir.path()).unwrap();
    let mut value: serde_json::Value =
        serde_json::from_str(&linear_artifact(Domain::Diabetes, 1, 0.0)).unwrap();
    let names = value["feature_names"].as_array_mut().unwrap();
    names.swap(0, 1);
    std::fs::write(&paths.diabetes, value.to_string()).unwrap();

    let err = ModelSet::load(&paths).unwrap_err();
    assert!(matches!(
        err,
        ModelSetError::Load {
            domain: Domain::Diabetes,
            source: ArtifactError::FeatureOrder { index: 0, .. },
            ..
        }
    ));
}

#[test]
fn corrupt_artifact_is_fatal_and_named() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixture_models(dir.path()).unwrap();
    std::fs::write(&paths.heart_disease, "{ not json").unwrap();
    let err = ModelSet::load(&paths).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("heart_disease"), "{msg}");
    assert!(msg.contains("heart.json"), "{msg}");
}

#[test]
fn logistic_threshold_defaults_to_half() {
    let artifact = ModelArtifact::from_json(
        r#"{"name":"lr","estimator":{"kind":"logistic_regression","coef":[1.0],"intercept":0.0}}"#,
    )
    .unwrap();
    match artifact.estimator {
        Estimator::LogisticRegression { threshold, .. } => {
            assert_abs_diff_eq!(threshold, 0.5)
        }
        other => panic!("unexpected estimator {other:?}"),
    }
}
