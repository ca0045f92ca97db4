use pretty_assertions::assert_eq;
use proptest::prelude::*;
use screen_form::{assemble, assess, collect, FormInput, Source};
use screen_model::{Label, ModelSet};
use screen_schema::{Domain, Mode};

use crate::write_fixture_models;

#[test]
fn normal_and_advanced_vectors_have_equal_length() {
    for domain in Domain::ALL {
        let normal = assemble(&collect(domain, Mode::Normal, &FormInput::new()).unwrap()).unwrap();
        let advanced =
            assemble(&collect(domain, Mode::Advanced, &FormInput::new()).unwrap()).unwrap();
        assert_eq!(normal.len(), advanced.len(), "{domain}");
        assert_eq!(normal.len(), domain.feature_len(), "{domain}");
    }
}

#[test]
fn hidden_positions_hold_documented_defaults() {
    let input = FormInput::new()
        .with("fo", 119.992)
        .with("jitter_percent", 0.00784)
        .with("shimmer", 0.04374)
        .with("hnr", 21.033)
        .with("rpde", 0.414783)
        .with("ppe", 0.284654);
    let form = collect(Domain::Parkinsons, Mode::Normal, &input).unwrap();
    let vector = assemble(&form).unwrap();
    let schema = Domain::Parkinsons.schema();
    for (value, field) in form.values.iter().zip(schema.fields) {
        let position = schema.position(field.column).unwrap();
        if field.essential {
            assert_eq!(value.source, Source::User);
        } else {
            assert_eq!(value.source, Source::Default);
            assert_eq!(vector.values[position], 0.0, "{}", field.key);
        }
    }
    assert_eq!(vector.values[0], 119.992);
    assert_eq!(vector.values[21], 0.284654);
}

#[test]
fn diabetes_normal_reference_case() {
    let dir = tempfile::tempdir().unwrap();
    let models = ModelSet::load(&write_fixture_models(dir.path()).unwrap()).unwrap();
    let input = FormInput::new()
        .with("glucose", 150.0)
        .with("bmi", 32.5)
        .with("age", 45.0);
    let assessment = assess(&models, Domain::Diabetes, Mode::Normal, &input);
    assert_eq!(
        assessment.features,
        Some(vec![0.0, 150.0, 0.0, 0.0, 0.0, 32.5, 0.0, 45.0])
    );
    assert_eq!(assessment.label, Some(Label::Positive));
    assert_eq!(assessment.outcome.message, "The person is diabetic");
}

#[test]
fn column_names_are_accepted_as_keys() {
    let by_key = FormInput::new().with("glucose", 150.0).with("bmi", 32.5);
    let by_column = FormInput::new().with("Glucose", 150.0).with("BMI", 32.5);
    let a = assemble(&collect(Domain::Diabetes, Mode::Normal, &by_key).unwrap()).unwrap();
    let b = assemble(&collect(Domain::Diabetes, Mode::Normal, &by_column).unwrap()).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn assembly_is_idempotent_for_any_heart_form(
        age in 1u32..100,
        chol in 100.0f64..400.0,
        bp in 80.0f64..200.0,
        sex in prop_oneof![Just("Female"), Just("Male")],
        vessels in 0u32..=3,
    ) {
        let input = FormInput::new()
            .with("age", f64::from(age))
            .with("cholesterol", chol)
            .with("resting_bp", bp)
            .with("sex", sex)
            .with("major_vessels", f64::from(vessels));
        let form = collect(Domain::HeartDisease, Mode::Advanced, &input).unwrap();
        let first = assemble(&form).unwrap();
        let second = assemble(&form).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.values[0], f64::from(age));
        prop_assert_eq!(first.values[4], chol);
        prop_assert_eq!(first.values[11], f64::from(vessels));
    }
}
