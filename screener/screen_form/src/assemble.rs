//! Feature vector assembly in the pinned model order.

use screen_schema::Domain;
use serde::Serialize;

use crate::collect::CollectedForm;
use crate::error::FormError;

/// Model input for one screen. Length always equals the domain's feature count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub domain: Domain,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Orders collected values by the domain's feature order.
///
/// Display order never leaks into the vector: each position is looked up by
/// column name, so the result is identical whatever order the form used.
pub fn assemble(form: &CollectedForm) -> Result<FeatureVector, FormError> {
    let schema = form.domain.schema();
    let values = schema
        .feature_order
        .iter()
        .map(|&column| {
            form.values
                .iter()
                .find(|v| v.column == column)
                .map(|v| v.value)
                .ok_or(FormError::MissingFeature { column })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug_assert_eq!(values.len(), form.domain.feature_len());
    log::trace!("assembled {} vector {:?}", form.domain, values);
    Ok(FeatureVector {
        domain: form.domain,
        values,
    })
}
