//! The collect → assemble → invoke → present pass behind each screen's action.
//!
//! ```no_run
//! use screen_form::{assess, FormInput};
//! use screen_model::{ModelPaths, ModelSet};
//! use screen_schema::{Domain, Mode};
//!
//! let models = ModelSet::load(&ModelPaths::default())?;
//! let input = FormInput::new()
//!     .with("glucose", 150.0)
//!     .with("bmi", 32.5)
//!     .with("age", 45.0);
//! let assessment = assess(&models, Domain::Diabetes, Mode::Normal, &input);
//! println!("{}", assessment.outcome.message);
//! # Ok::<(), screen_model::ModelSetError>(())
//! ```

pub mod assemble;
pub mod collect;
pub mod error;
pub mod input;
pub mod invoke;
pub mod pipeline;
pub mod present;

pub use assemble::{assemble, FeatureVector};
pub use collect::{collect, CollectedForm, CollectedValue, Source};
pub use error::{AssessError, FormError};
pub use input::{FieldValue, FormInput};
pub use invoke::invoke;
pub use pipeline::{assess, Assessment};
pub use present::{failure, messages, present, reads_as_negative, Outcome, Tone};
