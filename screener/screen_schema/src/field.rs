// Field descriptors for screen inputs

use crate::error::SchemaError;

/// Closed table mapping human-readable option labels to model codes.
///
/// Option menus are rendered from the same table used for lookup, so every
/// label a user can pick resolves to a code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMap {
    pub name: &'static str,
    entries: &'static [(&'static str, i64)],
}

impl CategoryMap {
    /// Panics on an empty table; in a `static` that is a compile error.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        assert!(!entries.is_empty(), "category map needs at least one entry");
        Self { name, entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, i64)] {
        self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Looks up the code for a label. Matching ignores ASCII case so typed
    /// input like `male` resolves the same as the menu entry `Male`.
    pub fn code(&self, label: &str) -> Option<i64> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, code)| *code)
    }

    /// Canonical label for `label`, as spelled in the menu.
    pub fn canonical(&self, label: &str) -> Option<&'static str> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(l, _)| *l)
    }

    pub fn label_for(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(l, _)| *l)
    }

    /// The first menu entry, which is what an untouched selector shows.
    pub fn first(&self) -> (&'static str, i64) {
        self.entries[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Real-valued measurement.
    Continuous,
    /// Whole-number count (age in years, pregnancies, vessels).
    Count,
    /// Selector backed by a category map.
    Category(&'static CategoryMap),
}

/// One input of a screen, in the order the model expects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Stable identifier used on the command line and in reports.
    pub key: &'static str,
    /// Column name the model was trained with.
    pub column: &'static str,
    pub label: &'static str,
    pub help: Option<&'static str>,
    pub kind: FieldKind,
    /// Editable in Normal mode.
    pub essential: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    /// Decimal places shown when echoing the value back.
    pub precision: usize,
}

impl FieldSpec {
    pub const fn continuous(key: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            key,
            column,
            label,
            help: None,
            kind: FieldKind::Continuous,
            essential: false,
            min: Some(0.0),
            max: None,
            step: 1.0,
            precision: 2,
        }
    }

    pub const fn count(key: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Count,
            precision: 0,
            ..Self::continuous(key, column, label)
        }
    }

    pub const fn category(
        key: &'static str,
        column: &'static str,
        label: &'static str,
        map: &'static CategoryMap,
    ) -> Self {
        Self {
            kind: FieldKind::Category(map),
            min: None,
            precision: 0,
            ..Self::continuous(key, column, label)
        }
    }

    pub const fn essential(self) -> Self {
        Self {
            essential: true,
            ..self
        }
    }

    pub const fn help(self, help: &'static str) -> Self {
        Self {
            help: Some(help),
            ..self
        }
    }

    pub const fn step(self, step: f64, precision: usize) -> Self {
        Self {
            step,
            precision,
            ..self
        }
    }

    pub const fn at_most(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    /// Drops the lower bound; some voice measures are legitimately negative.
    pub const fn unbounded(self) -> Self {
        Self { min: None, ..self }
    }

    pub fn is_category(&self) -> bool {
        matches!(self.kind, FieldKind::Category(_))
    }

    pub fn category_map(&self) -> Option<&'static CategoryMap> {
        match self.kind {
            FieldKind::Category(map) => Some(map),
            _ => None,
        }
    }

    /// Value the model receives when the field is not user-editable:
    /// zero for numbers, the first option's code for selectors.
    pub fn default_feature(&self) -> f64 {
        match self.kind {
            FieldKind::Category(map) => map.first().1 as f64,
            FieldKind::Continuous | FieldKind::Count => 0.0,
        }
    }

    /// Checks a numeric entry against this field's constraints.
    pub fn check_number(&self, value: f64) -> Result<f64, SchemaError> {
        if self.is_category() {
            return Err(SchemaError::ExpectedCategory { field: self.key });
        }
        if !value.is_finite() {
            return Err(SchemaError::NotFinite { field: self.key });
        }
        if matches!(self.kind, FieldKind::Count) && value.fract() != 0.0 {
            return Err(SchemaError::NotWholeNumber {
                field: self.key,
                value,
            });
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(SchemaError::BelowMinimum {
                    field: self.key,
                    value,
                    min,
                });
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(SchemaError::AboveMaximum {
                    field: self.key,
                    value,
                    max,
                });
            }
        }
        Ok(value)
    }

    /// Parses and checks typed numeric input.
    pub fn parse_number(&self, text: &str) -> Result<f64, SchemaError> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| SchemaError::ExpectedNumber {
                field: self.key,
                text: text.to_string(),
            })?;
        self.check_number(value)
    }

    /// Resolves a selector label to its code.
    pub fn resolve_choice(&self, label: &str) -> Result<i64, SchemaError> {
        let map = self.category_map().ok_or_else(|| SchemaError::ExpectedNumber {
            field: self.key,
            text: label.to_string(),
        })?;
        map.code(label).ok_or_else(|| SchemaError::UnmappedCategory {
            field: self.key,
            label: label.to_string(),
        })
    }

    /// Formats a numeric value with the field's display precision.
    pub fn format_number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    /// Short human-readable constraint summary, e.g. `>= 0`, `0..=3`.
    pub fn constraint_summary(&self) -> String {
        match (self.kind, self.min, self.max) {
            (FieldKind::Category(map), _, _) => map.labels().collect::<Vec<_>>().join(" | "),
            (_, Some(min), Some(max)) => {
                format!("{}..={}", self.format_number(min), self.format_number(max))
            }
            (_, Some(min), None) => format!(">= {}", self.format_number(min)),
            (_, None, Some(max)) => format!("<= {}", self.format_number(max)),
            (_, None, None) => "any value".to_string(),
        }
    }
}
