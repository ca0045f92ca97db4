//! Declarative form schemas for the three risk screens.
//!
//! Each [`Domain`] owns a [`DomainSchema`]: the pinned feature order its model
//! was trained on, one [`FieldSpec`] per feature, and the subset of fields a
//! user edits in [`Mode::Normal`]. Collection and vector assembly are driven
//! entirely from these tables.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod field;

pub use catalog::{DIABETES_FEATURES, HEART_DISEASE_FEATURES, PARKINSONS_FEATURES};
pub use domain::{Domain, DomainSchema, Mode};
pub use error::SchemaError;
pub use field::{CategoryMap, FieldKind, FieldSpec};
