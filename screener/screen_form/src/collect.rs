//! Generic input collector driven by the domain schema.

use std::collections::HashMap;

use screen_schema::{Domain, FieldKind, FieldSpec, Mode};
use serde::Serialize;

use crate::error::FormError;
use crate::input::{FieldValue, FormInput};

/// Where a collected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Entered by the user.
    User,
    /// Editable but left untouched; the widget's initial value.
    Initial,
    /// Hidden in this mode; the domain default.
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedValue {
    pub key: &'static str,
    pub column: &'static str,
    /// Numeric value as the model receives it (category code for selectors).
    pub value: f64,
    /// Selected option label, for selector fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<&'static str>,
    pub source: Source,
}

/// One value per schema field, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectedForm {
    pub domain: Domain,
    pub mode: Mode,
    pub values: Vec<CollectedValue>,
}

impl CollectedForm {
    pub fn get(&self, key: &str) -> Option<&CollectedValue> {
        self.values.iter().find(|v| v.key == key)
    }
}

/// Produces a complete, validated set of values for `domain` in `mode`.
///
/// Fields not editable in `mode` take the domain default; supplying one is
/// an error. Editable fields the user skipped take the widget's initial
/// value, which coincides with the default.
pub fn collect(domain: Domain, mode: Mode, input: &FormInput) -> Result<CollectedForm, FormError> {
    let schema = domain.schema();

    let mut entered: HashMap<&'static str, &FieldValue> = HashMap::new();
    for (key, value) in input.iter() {
        let field = schema.lookup(key)?;
        if !mode.is_editable(field) {
            return Err(FormError::NotEditable {
                field: field.key,
                mode,
            });
        }
        if entered.insert(field.key, value).is_some() {
            return Err(FormError::Duplicate { field: field.key });
        }
    }

    let values = schema
        .fields
        .iter()
        .map(|field| match entered.get(field.key) {
            Some(value) => resolve(field, value),
            None => Ok(fallback(field, mode)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectedForm {
        domain,
        mode,
        values,
    })
}

fn resolve(field: &'static FieldSpec, value: &FieldValue) -> Result<CollectedValue, FormError> {
    let (value, choice) = match (field.kind, value) {
        (FieldKind::Category(map), FieldValue::Choice(label)) => {
            let code = field.resolve_choice(label)?;
            (code as f64, map.canonical(label))
        }
        // check_number rejects numbers for selectors
        (_, FieldValue::Number(v)) => (field.check_number(*v)?, None),
        (_, FieldValue::Choice(text)) => (field.parse_number(text)?, None),
    };
    Ok(CollectedValue {
        key: field.key,
        column: field.column,
        value,
        choice,
        source: Source::User,
    })
}

fn fallback(field: &'static FieldSpec, mode: Mode) -> CollectedValue {
    CollectedValue {
        key: field.key,
        column: field.column,
        value: field.default_feature(),
        choice: field.category_map().map(|map| map.first().0),
        source: if mode.is_editable(field) {
            Source::Initial
        } else {
            Source::Default
        },
    }
}
