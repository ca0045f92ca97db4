//! One action of one screen

use screen_model::{Label, ModelSet};
use screen_schema::{Domain, Mode};
use serde::Serialize;

use crate::assemble::assemble;
use crate::collect::collect;
use crate::error::AssessError;
use crate::input::FormInput;
use crate::invoke::invoke;
use crate::present::{failure, present, Outcome};

/// Result of pressing a screen's action control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub domain: Domain,
    pub mode: Mode,
    /// Assembled vector, absent when collection failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    pub outcome: Outcome,
}

impl Assessment {
    /// True when the model produced a label.
    pub fn predicted(&self) -> bool {
        self.label.is_some()
    }
}

/// Collects, assembles, invokes and presents. Never fails: every error
/// becomes an error-toned outcome and the caller stays usable.
pub fn assess(models: &ModelSet, domain: Domain, mode: Mode, input: &FormInput) -> Assessment {
    let mut features = None;
    let result = run(models, domain, mode, input, &mut features);

    let (label, outcome) = match result {
        Ok(label) => {
            log::info!("{domain} ({mode}) prediction: {label}");
            (Some(label), present(domain, label))
        }
        Err(e) => {
            log::warn!("{domain} ({mode}) assessment failed: {e}");
            (None, failure(&e))
        }
    };

    Assessment {
        domain,
        mode,
        features,
        label,
        outcome,
    }
}

fn run(
    models: &ModelSet,
    domain: Domain,
    mode: Mode,
    input: &FormInput,
    features: &mut Option<Vec<f64>>,
) -> Result<Label, AssessError> {
    let form = collect(domain, mode, input)?;
    let vector = assemble(&form)?;
    log::debug!("{domain} features: {:?}", vector.values);
    *features = Some(vector.values.clone());

    let classifier = models.get(domain).ok_or(AssessError::MissingModel(domain))?;
    Ok(invoke(classifier, &vector)?)
}
