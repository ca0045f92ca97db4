//! Line-oriented interactive session over the three screens.

use std::collections::HashMap;

use screen_form::{assess, input::split_assignment, FieldValue, FormInput};
use screen_model::ModelSet;
use screen_schema::{Domain, Mode};

use crate::config::OutputFormat;
use crate::render;

const HELP: &[&str] = &[
    "commands:",
    "  :screen [domain]     switch screen (no argument lists them)",
    "  :mode <normal|advanced>",
    "  <key> = <value>      set a field on the current screen",
    "  :fields              show the current screen and entered values",
    "  :check               run the current screen's assessment",
    "  :reset               clear entered values for this screen and mode",
    "  :help, :quit",
];

/// Entered values persist per screen and mode, like widget state.
#[derive(Debug)]
pub struct ScreenSession {
    models: ModelSet,
    output: OutputFormat,
    domain: Domain,
    mode: Mode,
    values: HashMap<(Domain, Mode), FormInput>,
}

impl ScreenSession {
    pub fn new(models: ModelSet, mode: Mode, output: OutputFormat) -> Self {
        Self {
            models,
            output,
            domain: Domain::Diabetes,
            mode,
            values: HashMap::new(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        format!("{}[{}]> ", self.domain.slug(), self.mode.to_string().to_lowercase())
    }

    pub fn current(&self) -> Option<&FormInput> {
        self.values.get(&(self.domain, self.mode))
    }

    /// Handles one line. Returns output lines and whether to exit.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        match split_assignment(trimmed) {
            Some((key, value)) => (self.assign(key, value), false),
            None => (
                vec![format!(
                    "error: expected '<key> = <value>' or a command, got '{trimmed}' (try :help)"
                )],
                false,
            ),
        }
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let out = match cmd {
            ":q" | ":quit" | ":exit" => return (Vec::new(), true),
            ":help" => HELP.iter().map(|s| s.to_string()).collect(),
            ":screen" if arg.is_empty() => render::domains(),
            ":screen" => match arg.parse::<Domain>() {
                Ok(domain) => {
                    self.domain = domain;
                    render::fields(domain, self.mode, self.current())
                }
                Err(e) => vec![format!("error: {e}")],
            },
            ":mode" => match arg.parse::<Mode>() {
                Ok(mode) => {
                    self.mode = mode;
                    render::fields(self.domain, mode, self.current())
                }
                Err(e) => vec![format!("error: {e}")],
            },
            ":fields" => render::fields(self.domain, self.mode, self.current()),
            ":check" => self.check(),
            ":reset" => {
                self.values.remove(&(self.domain, self.mode));
                vec![format!("cleared {} ({} mode)", self.domain, self.mode)]
            }
            other => vec![format!("error: unknown command '{other}'")],
        };
        (out, false)
    }

    fn assign(&mut self, key: &str, text: &str) -> Vec<String> {
        let schema = self.domain.schema();
        let field = match schema.lookup(key) {
            Ok(field) => field,
            Err(e) => return vec![format!("error: {e}")],
        };
        if !self.mode.is_editable(field) {
            return vec![format!(
                "error: {} is not editable in {} mode (switch with :mode advanced)",
                field.key, self.mode
            )];
        }
        let value = match FieldValue::parse_for(field, text) {
            Ok(value) => value,
            Err(e) => return vec![format!("error: {e}")],
        };
        let shown = match &value {
            FieldValue::Number(v) => field.format_number(*v),
            FieldValue::Choice(label) => label.clone(),
        };
        // stored under the key so a column-name alias overwrites it
        self.values
            .entry((self.domain, self.mode))
            .or_default()
            .set(field.key, value);
        vec![format!("{} = {shown}", field.key)]
    }

    fn check(&self) -> Vec<String> {
        let empty = FormInput::new();
        let input = self.current().unwrap_or(&empty);
        let assessment = assess(&self.models, self.domain, self.mode, input);
        match self.output {
            OutputFormat::Text => vec![render::outcome(&assessment.outcome)],
            OutputFormat::Json => match render::assessment_json(&assessment) {
                Ok(json) => json.lines().map(str::to_string).collect(),
                Err(e) => vec![format!("error: {e}")],
            },
        }
    }
}
