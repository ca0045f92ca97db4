use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::SchemaError;
use crate::field::FieldSpec;

/// One of the three independent assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Diabetes, Domain::HeartDisease, Domain::Parkinsons];

    pub fn slug(self) -> &'static str {
        match self {
            Domain::Diabetes => "diabetes",
            Domain::HeartDisease => "heart_disease",
            Domain::Parkinsons => "parkinsons",
        }
    }

    /// Navigation entry shown in the screen menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Check",
            Domain::HeartDisease => "Heart Risk Check",
            Domain::Parkinsons => "Parkinson's Voice Check",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Check (Type-2 risk)",
            Domain::HeartDisease => "Heart Disease Risk Check",
            Domain::Parkinsons => "Parkinson's Voice Check",
        }
    }

    /// Label of the action control that runs the assessment.
    pub fn action_label(self) -> &'static str {
        match self {
            Domain::Diabetes => "Check diabetes risk",
            Domain::HeartDisease => "Check heart risk",
            Domain::Parkinsons => "Analyze voice for Parkinson's risk",
        }
    }

    pub fn schema(self) -> &'static DomainSchema {
        match self {
            Domain::Diabetes => &catalog::DIABETES,
            Domain::HeartDisease => &catalog::HEART_DISEASE,
            Domain::Parkinsons => &catalog::PARKINSONS,
        }
    }

    /// Length of the feature vector this domain's model expects.
    pub fn feature_len(self) -> usize {
        self.schema().feature_order.len()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Domain {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "diabetes" => Ok(Domain::Diabetes),
            "heart" | "heart_disease" => Ok(Domain::HeartDisease),
            "parkinsons" | "parkinson" | "parkinson's" | "pd" => Ok(Domain::Parkinsons),
            _ => Err(SchemaError::UnknownDomain(s.to_string())),
        }
    }
}

/// Presentation mode of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Essential fields only; everything else takes its default.
    #[default]
    Normal,
    /// Every field is editable.
    Advanced,
}

impl Mode {
    pub fn is_editable(self, field: &FieldSpec) -> bool {
        match self {
            Mode::Normal => field.essential,
            Mode::Advanced => true,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Mode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Mode::Normal),
            "advanced" => Ok(Mode::Advanced),
            _ => Err(SchemaError::UnknownMode(s.to_string())),
        }
    }
}

/// Declarative description of one screen.
#[derive(Debug)]
pub struct DomainSchema {
    pub domain: Domain,
    /// Model column order; the vector handed to the classifier follows it exactly.
    pub feature_order: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    /// Keys shown in Normal mode, in display order.
    pub normal_layout: &'static [&'static str],
    pub intro_normal: &'static str,
    pub intro_advanced: &'static str,
}

impl DomainSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finds a field by key, falling back to the model column name.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        let key = key.trim();
        self.fields
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .or_else(|| self.fields.iter().find(|f| f.column == key))
    }

    pub fn lookup(&self, key: &str) -> Result<&'static FieldSpec, SchemaError> {
        self.field(key).ok_or_else(|| SchemaError::UnknownField {
            domain: self.domain.slug(),
            key: key.to_string(),
        })
    }

    /// Position of a field in the feature vector.
    pub fn position(&self, key: &str) -> Option<usize> {
        let field = self.field(key)?;
        self.feature_order.iter().position(|c| *c == field.column)
    }

    pub fn intro(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Normal => self.intro_normal,
            Mode::Advanced => self.intro_advanced,
        }
    }

    /// Fields the user edits in `mode`, in display order.
    pub fn editable_fields(&self, mode: Mode) -> Vec<&'static FieldSpec> {
        match mode {
            Mode::Normal => self
                .normal_layout
                .iter()
                .filter_map(|key| self.field(key))
                .collect(),
            Mode::Advanced => self.fields.iter().collect(),
        }
    }

    /// Fields hidden in `mode`, which silently take their defaults.
    pub fn defaulted_fields(&self, mode: Mode) -> Vec<&'static FieldSpec> {
        self.fields.iter().filter(|f| !mode.is_editable(f)).collect()
    }
}
