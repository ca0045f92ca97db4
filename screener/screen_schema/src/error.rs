use thiserror::Error;

/// Errors raised while resolving domains, modes, or field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("unknown screen '{0}' (expected diabetes, heart or parkinsons)")]
    UnknownDomain(String),
    #[error("unknown mode '{0}' (expected normal or advanced)")]
    UnknownMode(String),
    #[error("unknown field '{key}' for {domain}")]
    UnknownField { domain: &'static str, key: String },
    #[error("{field}: {value} is below the minimum of {min}")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },
    #[error("{field}: {value} is above the maximum of {max}")]
    AboveMaximum {
        field: &'static str,
        value: f64,
        max: f64,
    },
    #[error("{field}: expected a whole number, got {value}")]
    NotWholeNumber { field: &'static str, value: f64 },
    #[error("{field}: value must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field}: '{label}' is not one of the offered options")]
    UnmappedCategory { field: &'static str, label: String },
    #[error("{field}: expected one of the offered options, got a number")]
    ExpectedCategory { field: &'static str },
    #[error("{field}: expected a number, got '{text}'")]
    ExpectedNumber { field: &'static str, text: String },
}
