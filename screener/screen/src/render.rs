//! Terminal rendering of screens and results

use screen_form::{Assessment, FieldValue, FormInput, Outcome, Tone};
use screen_schema::{Domain, FieldKind, FieldSpec, Mode};

/// Navigation menu, one line per screen.
pub fn domains() -> Vec<String> {
    Domain::ALL
        .iter()
        .map(|d| format!("{:<14} {}", d.slug(), d.menu_label()))
        .collect()
}

pub fn outcome(outcome: &Outcome) -> String {
    let mark = match outcome.tone {
        Tone::Success => '✓',
        Tone::Error => '✗',
    };
    format!("{mark} {}", outcome.message)
}

pub fn assessment_json(assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

/// The screen as a form: title, intro, editable inputs and what is defaulted.
pub fn fields(domain: Domain, mode: Mode, current: Option<&FormInput>) -> Vec<String> {
    let schema = domain.schema();
    let mut lines = vec![
        format!("{} [{mode} mode]", domain.title()),
        schema.intro(mode).to_string(),
        String::new(),
    ];

    for field in schema.editable_fields(mode) {
        let value = current
            .and_then(|input| entered(input, field))
            .map(|v| format!(" = {v}"))
            .unwrap_or_default();
        lines.push(format!(
            "  {:<22} {}  [{}]{value}",
            field.key,
            field.label,
            field.constraint_summary()
        ));
        if let Some(help) = field.help {
            lines.push(format!("  {:<22} {help}", ""));
        }
    }

    let defaulted = schema.defaulted_fields(mode);
    if !defaulted.is_empty() {
        lines.push(String::new());
        lines.push(format!("Defaulted in {mode} mode:"));
        for field in defaulted {
            lines.push(format!("  {:<22} {}", field.key, default_text(field)));
        }
    }

    lines.push(String::new());
    lines.push(format!("Action: {}", domain.action_label()));
    lines
}

fn entered<'a>(input: &'a FormInput, field: &FieldSpec) -> Option<&'a FieldValue> {
    input.get(field.key).or_else(|| input.get(field.column))
}

fn default_text(field: &FieldSpec) -> String {
    match field.kind {
        FieldKind::Category(map) => map.first().0.to_string(),
        FieldKind::Continuous | FieldKind::Count => field.format_number(field.default_feature()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_form::{failure, present};
    use screen_model::Label;

    #[test]
    fn outcome_marks_follow_tone() {
        assert_eq!(
            outcome(&present(Domain::Diabetes, Label::Negative)),
            "✓ The person is not diabetic"
        );
        assert_eq!(
            outcome(&failure("boom")),
            "✗ Could not generate a prediction. Details: boom"
        );
    }

    #[test]
    fn normal_fields_list_editable_and_defaulted() {
        let input = FormInput::new().with("glucose", 150.0);
        let lines = fields(Domain::Diabetes, Mode::Normal, Some(&input));
        let text = lines.join("\n");
        assert!(text.starts_with("Diabetes Check (Type-2 risk) [Normal mode]"));
        assert!(text.contains("glucose"));
        assert!(text.contains("= 150"));
        assert!(text.contains("Defaulted in Normal mode:"));
        assert!(text.contains("insulin"));
        assert!(text.ends_with("Action: Check diabetes risk"));
    }

    #[test]
    fn advanced_fields_have_nothing_defaulted() {
        let text = fields(Domain::HeartDisease, Mode::Advanced, None).join("\n");
        assert!(!text.contains("Defaulted"));
        assert!(text.contains("Typical chest pain | Atypical chest pain"));
    }

    #[test]
    fn menu_lists_three_screens() {
        let menu = domains();
        assert_eq!(menu.len(), 3);
        assert!(menu[2].contains("Parkinson's Voice Check"));
    }
}
