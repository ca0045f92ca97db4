//! Field tables for the three screens.
//!
//! The `*_FEATURES` constants pin the column order each model artifact was
//! trained on. Field tables list the same columns in the same order; the
//! unit tests below hold the two together.

use crate::domain::{Domain, DomainSchema};
use crate::field::{CategoryMap, FieldSpec};

pub const DIABETES_FEATURES: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

pub const HEART_DISEASE_FEATURES: [&str; 13] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

pub const PARKINSONS_FEATURES: [&str; 22] = [
    "MDVP:Fo(Hz)",
    "MDVP:Fhi(Hz)",
    "MDVP:Flo(Hz)",
    "MDVP:Jitter(%)",
    "MDVP:Jitter(Abs)",
    "MDVP:RAP",
    "MDVP:PPQ",
    "Jitter:DDP",
    "MDVP:Shimmer",
    "MDVP:Shimmer(dB)",
    "Shimmer:APQ3",
    "Shimmer:APQ5",
    "MDVP:APQ",
    "Shimmer:DDA",
    "NHR",
    "HNR",
    "RPDE",
    "DFA",
    "spread1",
    "spread2",
    "D2",
    "PPE",
];

// Diabetes

static DIABETES_FIELDS: [FieldSpec; 8] = [
    FieldSpec::count("pregnancies", "Pregnancies", "Pregnancies")
        .help("How many times the person has been pregnant. If male, keep 0."),
    FieldSpec::continuous("glucose", "Glucose", "Blood sugar (mg/dL)")
        .essential()
        .help("Fasting blood glucose. Example: 90–120 mg/dL.")
        .step(1.0, 1),
    FieldSpec::continuous("blood_pressure", "BloodPressure", "Blood pressure (mmHg)")
        .help("Resting diastolic pressure. Example: 70–90 mmHg.")
        .step(1.0, 1),
    FieldSpec::continuous("skin_thickness", "SkinThickness", "Skin fold thickness (mm)")
        .help("Triceps skinfold (if known). Otherwise leave default.")
        .step(0.5, 1),
    FieldSpec::continuous("insulin", "Insulin", "Insulin (µU/mL)")
        .help("2-hour serum insulin. Leave 0 if unknown.")
        .step(1.0, 1),
    FieldSpec::continuous("bmi", "BMI", "BMI (kg/m²)")
        .essential()
        .help("Body Mass Index. Example: 22.5.")
        .step(0.1, 1),
    FieldSpec::continuous("diabetes_pedigree", "DiabetesPedigreeFunction", "Family history score")
        .help("Higher = stronger family history of diabetes. If unknown, keep default.")
        .step(0.01, 2),
    FieldSpec::count("age", "Age", "Age (years)")
        .essential()
        .help("Age of the person."),
];

pub(crate) static DIABETES: DomainSchema = DomainSchema {
    domain: Domain::Diabetes,
    feature_order: &DIABETES_FEATURES,
    fields: &DIABETES_FIELDS,
    normal_layout: &["glucose", "bmi", "age"],
    intro_normal: "Fill in essential details below. These are the key indicators for diabetes risk.",
    intro_advanced: "Fill in all parameters below for detailed diabetes risk assessment.",
};

// Heart disease

static SEX: CategoryMap = CategoryMap::new("sex", &[("Female", 0), ("Male", 1)]);

static CHEST_PAIN: CategoryMap = CategoryMap::new(
    "chest_pain",
    &[
        ("Typical chest pain", 0),
        ("Atypical chest pain", 1),
        ("Non-chest pain discomfort", 2),
        ("No symptoms", 3),
    ],
);

static YES_NO: CategoryMap = CategoryMap::new("yes_no", &[("No", 0), ("Yes", 1)]);

static RESTING_ECG: CategoryMap = CategoryMap::new(
    "resting_ecg",
    &[
        ("Normal", 0),
        ("ST-T wave abnormality", 1),
        ("Possible left ventricular hypertrophy", 2),
    ],
);

static ST_SLOPE: CategoryMap = CategoryMap::new(
    "st_slope",
    &[("Upsloping", 0), ("Flat", 1), ("Downsloping", 2)],
);

static THALLIUM: CategoryMap = CategoryMap::new(
    "thallium",
    &[("Normal", 0), ("Fixed defect", 1), ("Reversible defect", 2)],
);

static HEART_DISEASE_FIELDS: [FieldSpec; 13] = [
    FieldSpec::count("age", "age", "Age (years)")
        .essential()
        .help("Age of the person."),
    FieldSpec::category("sex", "sex", "Biological sex", &SEX).essential(),
    FieldSpec::category("chest_pain", "cp", "Chest symptoms", &CHEST_PAIN)
        .essential()
        .help("Describe the most fitting chest symptom."),
    FieldSpec::continuous("resting_bp", "trestbps", "Resting BP (mmHg)")
        .essential()
        .help("Typical range 90–140.")
        .step(1.0, 1),
    FieldSpec::continuous("cholesterol", "chol", "Cholesterol (mg/dL)")
        .essential()
        .help("Total serum cholesterol.")
        .step(1.0, 1),
    FieldSpec::category("fasting_blood_sugar", "fbs", "Fasting sugar > 120 mg/dL?", &YES_NO),
    FieldSpec::category("resting_ecg", "restecg", "ECG (resting)", &RESTING_ECG),
    FieldSpec::continuous("max_heart_rate", "thalach", "Max heart rate (bpm)")
        .essential()
        .step(1.0, 1),
    FieldSpec::category("exercise_angina", "exang", "Chest pain with exercise?", &YES_NO),
    FieldSpec::continuous("st_depression", "oldpeak", "ST depression (exercise)")
        .help("Higher can indicate ischemia. If unknown, leave default.")
        .step(0.1, 1),
    FieldSpec::category("st_slope", "slope", "ST segment slope", &ST_SLOPE),
    FieldSpec::count("major_vessels", "ca", "# major vessels seen (0–3)")
        .at_most(3.0)
        .help("Number of vessels colored by fluoroscopy."),
    FieldSpec::category("thallium", "thal", "Thallium stress test", &THALLIUM),
];

pub(crate) static HEART_DISEASE: DomainSchema = DomainSchema {
    domain: Domain::HeartDisease,
    feature_order: &HEART_DISEASE_FEATURES,
    fields: &HEART_DISEASE_FIELDS,
    normal_layout: &[
        "age",
        "sex",
        "cholesterol",
        "resting_bp",
        "max_heart_rate",
        "chest_pain",
    ],
    intro_normal: "Answer in simple terms. We'll use these key indicators to assess your heart disease risk.",
    intro_advanced: "Answer in everyday terms. We'll convert to the numbers your model expects.",
};

// Parkinson's

static PARKINSONS_FIELDS: [FieldSpec; 22] = [
    FieldSpec::continuous("fo", "MDVP:Fo(Hz)", "Pitch (Fo, Hz)")
        .essential()
        .help("Average voice pitch.")
        .step(0.1, 1),
    FieldSpec::continuous("fhi", "MDVP:Fhi(Hz)", "Highest pitch (Hz)")
        .help("Highest pitch detected.")
        .step(0.1, 1),
    FieldSpec::continuous("flo", "MDVP:Flo(Hz)", "Lowest pitch (Hz)")
        .help("Lowest pitch detected.")
        .step(0.1, 1),
    FieldSpec::continuous("jitter_percent", "MDVP:Jitter(%)", "Jitter (%)")
        .essential()
        .help("Pitch instability (smaller = steadier).")
        .step(0.0001, 4),
    FieldSpec::continuous("jitter_abs", "MDVP:Jitter(Abs)", "Jitter (Abs)")
        .help("Absolute pitch variation.")
        .step(0.00001, 5),
    FieldSpec::continuous("rap", "MDVP:RAP", "RAP")
        .help("Relative average perturbation (pitch).")
        .step(0.0001, 4),
    FieldSpec::continuous("ppq", "MDVP:PPQ", "PPQ")
        .help("Pitch period variability.")
        .step(0.0001, 4),
    FieldSpec::continuous("ddp", "Jitter:DDP", "DDP")
        .help("Derived from jitter (steadiness).")
        .step(0.0001, 4),
    FieldSpec::continuous("shimmer", "MDVP:Shimmer", "Shimmer")
        .essential()
        .help("Loudness variation.")
        .step(0.0001, 4),
    FieldSpec::continuous("shimmer_db", "MDVP:Shimmer(dB)", "Shimmer (dB)")
        .help("Loudness variation in dB.")
        .step(0.01, 2),
    FieldSpec::continuous("apq3", "Shimmer:APQ3", "APQ3")
        .help("Amplitude perturbation quotient (3 cycles).")
        .step(0.0001, 4),
    FieldSpec::continuous("apq5", "Shimmer:APQ5", "APQ5")
        .help("Amplitude perturbation quotient (5 cycles).")
        .step(0.0001, 4),
    FieldSpec::continuous("apq", "MDVP:APQ", "APQ")
        .help("Amplitude perturbation quotient (overall).")
        .step(0.0001, 4),
    FieldSpec::continuous("dda", "Shimmer:DDA", "DDA")
        .help("Related to shimmer (amplitude steadiness).")
        .step(0.0001, 4),
    FieldSpec::continuous("nhr", "NHR", "Noise–to–Harmonics (NHR)")
        .help("More noise can indicate rough voice.")
        .step(0.0001, 4),
    FieldSpec::continuous("hnr", "HNR", "Harmonics–to–Noise (HNR)")
        .essential()
        .help("Higher = cleaner voice signal.")
        .step(0.01, 2),
    FieldSpec::continuous("rpde", "RPDE", "RPDE")
        .essential()
        .help("Signal complexity measure.")
        .step(0.0001, 4),
    FieldSpec::continuous("dfa", "DFA", "DFA")
        .help("Fractal scaling of the signal.")
        .step(0.0001, 4),
    FieldSpec::continuous("spread1", "spread1", "Spread1")
        .unbounded()
        .help("Frequency variation summary (1).")
        .step(0.0001, 4),
    FieldSpec::continuous("spread2", "spread2", "Spread2")
        .unbounded()
        .help("Frequency variation summary (2).")
        .step(0.0001, 4),
    FieldSpec::continuous("d2", "D2", "D2")
        .help("Signal dynamical complexity.")
        .step(0.0001, 4),
    FieldSpec::continuous("ppe", "PPE", "PPE")
        .essential()
        .help("Pitch period entropy (stability).")
        .step(0.0001, 4),
];

pub(crate) static PARKINSONS: DomainSchema = DomainSchema {
    domain: Domain::Parkinsons,
    feature_order: &PARKINSONS_FEATURES,
    fields: &PARKINSONS_FIELDS,
    normal_layout: &["fo", "jitter_percent", "shimmer", "hnr", "rpde", "ppe"],
    intro_normal: "This check uses key voice measurements from a short voice recording. \
                   Provide the main parameters that characterize voice quality.",
    intro_advanced: "This check uses measurements from a short voice recording (sustained vowel). \
                     If you don't have these exact values, leave defaults or use values \
                     calculated by your voice-analysis tool.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_tables_follow_pinned_feature_order() {
        for domain in Domain::ALL {
            let schema = domain.schema();
            let columns: Vec<&str> = schema.fields.iter().map(|f| f.column).collect();
            assert_eq!(columns, schema.feature_order.to_vec(), "{domain}");
        }
    }

    #[test]
    fn feature_lengths_match_models() {
        assert_eq!(Domain::Diabetes.feature_len(), 8);
        assert_eq!(Domain::HeartDisease.feature_len(), 13);
        assert_eq!(Domain::Parkinsons.feature_len(), 22);
    }

    #[test]
    fn normal_layout_lists_exactly_the_essential_fields() {
        for domain in Domain::ALL {
            let schema = domain.schema();
            let mut essential: Vec<&str> = schema
                .fields
                .iter()
                .filter(|f| f.essential)
                .map(|f| f.key)
                .collect();
            let mut layout = schema.normal_layout.to_vec();
            essential.sort_unstable();
            layout.sort_unstable();
            assert_eq!(layout, essential, "{domain}");
        }
    }

    #[test]
    fn keys_are_unique_within_a_screen() {
        for domain in Domain::ALL {
            let schema = domain.schema();
            let mut keys: Vec<&str> = schema.fields.iter().map(|f| f.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), schema.fields.len(), "{domain}");
        }
    }

    #[test]
    fn every_heart_option_resolves() {
        let schema = Domain::HeartDisease.schema();
        let mut selectors = 0;
        for field in schema.fields {
            if let FieldKind::Category(map) = field.kind {
                selectors += 1;
                assert!(!map.entries().is_empty(), "{} has no options", field.key);
                for label in map.labels() {
                    assert!(
                        field.resolve_choice(label).is_ok(),
                        "{}: '{label}' does not resolve",
                        field.key
                    );
                }
            }
        }
        assert_eq!(selectors, 7);
    }

    #[test]
    fn only_vessel_count_has_an_upper_bound() {
        for domain in Domain::ALL {
            for field in domain.schema().fields {
                if field.key == "major_vessels" && domain == Domain::HeartDisease {
                    assert_eq!(field.max, Some(3.0));
                } else {
                    assert_eq!(field.max, None, "{domain}.{}", field.key);
                }
            }
        }
    }
}
