// Raw user entries for one screen

use std::collections::BTreeMap;
use std::fmt;

use screen_schema::{FieldKind, FieldSpec, SchemaError};
use serde::{Deserialize, Serialize};

/// A single entered value: a number, or a selector label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Choice(String),
}

impl FieldValue {
    /// Interprets typed text according to the field's kind.
    pub fn parse_for(field: &FieldSpec, text: &str) -> Result<Self, SchemaError> {
        match field.kind {
            FieldKind::Category(map) => map
                .canonical(text)
                .map(|label| FieldValue::Choice(label.to_string()))
                .ok_or_else(|| SchemaError::UnmappedCategory {
                    field: field.key,
                    label: text.trim().to_string(),
                }),
            FieldKind::Continuous | FieldKind::Count => {
                field.parse_number(text).map(FieldValue::Number)
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Choice(s.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Choice(s) => write!(f, "{s}"),
        }
    }
}

/// Entries keyed by field key (or model column name).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    values: BTreeMap<String, FieldValue>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.values.insert(key.trim().to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Splits `key=value` into its trimmed halves.
pub fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let (key, value) = text.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_schema::Domain;

    #[test]
    fn parse_for_uses_field_kind() {
        let heart = Domain::HeartDisease.schema();
        let sex = heart.lookup("sex").unwrap();
        assert_eq!(
            FieldValue::parse_for(sex, "male"),
            Ok(FieldValue::Choice("Male".into()))
        );
        let chol = heart.lookup("cholesterol").unwrap();
        assert_eq!(
            FieldValue::parse_for(chol, "233"),
            Ok(FieldValue::Number(233.0))
        );
        assert!(FieldValue::parse_for(chol, "-5").is_err());
        assert!(FieldValue::parse_for(sex, "unknown").is_err());
    }

    #[test]
    fn assignments_split_on_first_equals() {
        assert_eq!(split_assignment("glucose=150"), Some(("glucose", "150")));
        assert_eq!(
            split_assignment(" chest_pain = No symptoms "),
            Some(("chest_pain", "No symptoms"))
        );
        assert_eq!(split_assignment("glucose"), None);
        assert_eq!(split_assignment("=3"), None);
        assert_eq!(split_assignment("bmi="), None);
    }

    #[test]
    fn input_deserializes_from_flat_json() {
        let input: FormInput =
            serde_json::from_str(r#"{"age": 63, "sex": "Male", "cholesterol": 233.0}"#).unwrap();
        assert_eq!(input.len(), 3);
        assert_eq!(input.get("age"), Some(&FieldValue::Number(63.0)));
        assert_eq!(input.get("sex"), Some(&FieldValue::Choice("Male".into())));
    }
}
