use std::cell::Cell;
use std::panic::{self, catch_unwind, AssertUnwindSafe};
use std::sync::Once;

use screen_model::{Classifier, Label, ModelError};

use crate::assemble::FeatureVector;

thread_local! {
    static IN_CLASSIFIER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Chains a panic hook that only logs panics raised inside `invoke`; every
/// other panic still reaches the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_CLASSIFIER.with(Cell::get) {
                log::debug!("classifier panic: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

/// Runs the classifier on `features`.
///
/// Whatever goes wrong inside the model, a returned error or a panic, comes
/// back as a `ModelError` so the screen can report it and stay usable.
pub fn invoke(classifier: &dyn Classifier, features: &FeatureVector) -> Result<Label, ModelError> {
    let expected = classifier.n_features();
    if features.len() != expected {
        return Err(ModelError::ShapeMismatch {
            expected,
            got: features.len(),
        });
    }

    log::debug!(
        "invoking {} ({}) for {}",
        classifier.name(),
        classifier.backend_name(),
        features.domain
    );
    install_quiet_hook();
    IN_CLASSIFIER.with(|flag| flag.set(true));
    let outcome = catch_unwind(AssertUnwindSafe(|| classifier.predict(features.as_slice())));
    IN_CLASSIFIER.with(|flag| flag.set(false));
    match outcome {
        Ok(result) => {
            match &result {
                Ok(label) => log::debug!("{} -> {}", classifier.name(), label),
                Err(e) => log::warn!("{} failed: {e}", classifier.name()),
            }
            result
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "classifier panicked".to_string());
            log::error!("{} panicked: {message}", classifier.name());
            Err(ModelError::Inference(message))
        }
    }
}
