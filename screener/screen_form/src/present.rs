//! Label to user-facing message

use std::fmt;

use screen_model::Label;
use screen_schema::Domain;
use serde::Serialize;

/// Visual styling of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

/// What the screen shows after its action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub message: String,
    pub tone: Tone,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// `(positive, negative)` messages for a screen.
pub fn messages(domain: Domain) -> (&'static str, &'static str) {
    match domain {
        Domain::Diabetes => ("The person is diabetic", "The person is not diabetic"),
        Domain::HeartDisease => (
            "The person is having heart disease",
            "The person does not have any heart disease",
        ),
        Domain::Parkinsons => (
            "The person has Parkinson's disease",
            "The person does not have Parkinson's disease",
        ),
    }
}

/// True when "not" appears anywhere in the message, in any case.
pub fn reads_as_negative(message: &str) -> bool {
    message.to_lowercase().contains("not")
}

/// Maps a label to its message. A positive finding is styled as an error.
pub fn present(domain: Domain, label: Label) -> Outcome {
    let (positive, negative) = messages(domain);
    let (message, tone) = match label {
        Label::Positive => (positive, Tone::Error),
        Label::Negative => (negative, Tone::Success),
    };
    debug_assert_eq!(reads_as_negative(message), !label.is_positive());
    Outcome {
        message: message.to_string(),
        tone,
    }
}

/// Non-fatal message shown when no prediction could be made.
pub fn failure(detail: impl fmt::Display) -> Outcome {
    Outcome {
        message: format!("Could not generate a prediction. Details: {detail}"),
        tone: Tone::Error,
    }
}
