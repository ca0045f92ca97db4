use pretty_assertions::assert_eq;
use screen_form::{assemble, collect, FormInput};
use screen_schema::{Domain, FieldKind, Mode};

#[test]
fn every_heart_selector_label_resolves() {
    let schema = Domain::HeartDisease.schema();
    let mut selectors = 0;
    for field in schema.fields {
        let FieldKind::Category(map) = field.kind else {
            continue;
        };
        selectors += 1;
        let position = schema.position(field.column).unwrap();
        for (label, code) in map.entries() {
            let input = FormInput::new().with(field.key, *label);
            let form = collect(Domain::HeartDisease, Mode::Advanced, &input)
                .unwrap_or_else(|e| panic!("{}={label}: {e}", field.key));
            let vector = assemble(&form).unwrap();
            assert_eq!(vector.values[position], *code as f64, "{}={label}", field.key);
        }
    }
    assert_eq!(selectors, 7);
}

#[test]
fn selector_labels_match_case_insensitively() {
    let input = FormInput::new()
        .with("st_slope", "downsloping")
        .with("thallium", "REVERSIBLE DEFECT")
        .with("resting_ecg", "  Possible left ventricular hypertrophy ");
    let vector = assemble(&collect(Domain::HeartDisease, Mode::Advanced, &input).unwrap()).unwrap();
    assert_eq!(vector.values[10], 2.0);
    assert_eq!(vector.values[12], 2.0);
    assert_eq!(vector.values[6], 2.0);
}

#[test]
fn unmapped_label_is_a_handled_failure() {
    let input = FormInput::new().with("chest_pain", "Sharp");
    let err = collect(Domain::HeartDisease, Mode::Normal, &input).unwrap_err();
    assert!(err.to_string().contains("chest_pain"), "{err}");
}
