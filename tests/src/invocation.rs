use std::sync::Arc;

use screen_form::{assemble, assess, collect, invoke, FeatureVector, FormInput};
use screen_model::{Classifier, Label, ModelArtifact, ModelError, ModelSet};
use screen_schema::{Domain, Mode};

use crate::{linear_artifact, write_fixture_models};

#[test]
fn correct_length_yields_a_binary_label() {
    let dir = tempfile::tempdir().unwrap();
    let models = ModelSet::load(&write_fixture_models(dir.path()).unwrap()).unwrap();
    for domain in Domain::ALL {
        for mode in [Mode::Normal, Mode::Advanced] {
            let vector = assemble(&collect(domain, mode, &FormInput::new()).unwrap()).unwrap();
            let classifier = models.get(domain).unwrap();
            let label = invoke(classifier, &vector).unwrap();
            assert!(matches!(label, Label::Negative | Label::Positive));
            assert!(label.code() <= 1);
        }
    }
}

#[test]
fn wrong_length_is_a_handled_failure() {
    let artifact = ModelArtifact::from_json(&linear_artifact(Domain::Diabetes, 1, -125.0)).unwrap();
    let short = FeatureVector {
        domain: Domain::Diabetes,
        values: vec![0.0; 7],
    };
    assert_eq!(
        invoke(&artifact, &short),
        Err(ModelError::ShapeMismatch {
            expected: 8,
            got: 7
        })
    );
}

struct Broken;

impl Classifier for Broken {
    fn predict(&self, _features: &[f64]) -> Result<Label, ModelError> {
        let empty: Vec<f64> = Vec::new();
        // out-of-bounds index panics inside the model
        Ok(Label::from(empty[3] > 0.0))
    }
    fn n_features(&self) -> usize {
        13
    }
    fn name(&self) -> &str {
        "broken"
    }
    fn backend_name(&self) -> &str {
        "test"
    }
}

#[test]
fn model_panic_becomes_visible_message() {
    let mut models = ModelSet::default();
    models.insert(Domain::HeartDisease, Arc::new(Broken)).unwrap();
    let assessment = assess(&models, Domain::HeartDisease, Mode::Normal, &FormInput::new());
    assert!(assessment.label.is_none());
    assert!(assessment.outcome.is_error());
    assert!(assessment
        .outcome
        .message
        .starts_with("Could not generate a prediction. Details: inference failed: "));
}

#[test]
fn non_finite_input_is_rejected_by_the_model() {
    let artifact = ModelArtifact::from_json(&linear_artifact(Domain::Diabetes, 1, 0.0)).unwrap();
    let mut values = vec![0.0; 8];
    values[2] = f64::NAN;
    let vector = FeatureVector {
        domain: Domain::Diabetes,
        values,
    };
    assert!(matches!(
        invoke(&artifact, &vector),
        Err(ModelError::InvalidInput(_))
    ));
}
