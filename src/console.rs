//! Line-oriented front end for the settings screen
//!
//! Each input line is one user action: finishing an edit of a tip field, flipping the
//! appearance or the slider toggle, or asking for the current state.

use crate::appearance::{Appearance, UnknownAppearance, theme};
use crate::state::SettingsState;
use crate::store::SettingsStore;
use crate::validator::{FieldUpdate, SettingsValidator};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  tip <value>              set the default tip, e.g. `tip 20%`
  max <value>              set the max tip, e.g. `max 40`
  appearance [light|dark]  set the appearance, toggles when no mode is given
  slider                   toggle the smooth slider
  show                     print the current settings
  json                     print the current settings as JSON
  help                     print this message
  quit                     leave";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}, type `help` for a list")]
    Unknown(String),

    #[error(transparent)]
    Appearance(#[from] UnknownAppearance),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw text of the default tip field, possibly empty
    DefaultTip(String),
    MaxTip(String),
    Appearance(Option<Appearance>),
    ToggleSlider,
    Show,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "tip" | "default" => Command::DefaultTip(rest.to_string()),
            "max" => Command::MaxTip(rest.to_string()),
            "appearance" | "theme" if rest.is_empty() => Command::Appearance(None),
            "appearance" | "theme" => Command::Appearance(Some(rest.parse()?)),
            "slider" => Command::ToggleSlider,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

pub struct Console<S: SettingsStore> {
    validator: SettingsValidator<S>,
}

impl<S: SettingsStore> Console<S> {
    pub fn new(store: S) -> Self {
        Self {
            validator: SettingsValidator::new(store),
        }
    }

    pub fn validator(&self) -> &SettingsValidator<S> {
        &self.validator
    }

    pub fn into_store(self) -> S {
        self.validator.into_store()
    }

    /// Read commands until `quit` or end of input, writing responses to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", describe(&self.validator.load_state()))?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    let response = self.execute(command);
                    writeln!(output, "{}", response)?;
                }
                Ok(None) => {}
                Err(e) => writeln!(output, "{}", e)?,
            }
        }

        output.flush()
    }

    /// Apply a command and return the text to show for it
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::DefaultTip(raw) => {
                field_response("Default tip", self.validator.submit_default_tip(&raw))
            }
            Command::MaxTip(raw) => field_response("Max tip", self.validator.submit_max_tip(&raw)),
            Command::Appearance(mode) => {
                let mode = mode.unwrap_or_else(|| self.validator.appearance().toggled());
                self.validator.set_appearance(mode);
                let colors = theme(mode);
                format!(
                    "Appearance: {} (background {}, text {})",
                    mode,
                    colors.background.to_hex(),
                    colors.foreground.to_hex()
                )
            }
            Command::ToggleSlider => {
                let enabled = self.validator.toggle_smooth_slider();
                format!("Smooth slider: {}", on_off(enabled))
            }
            Command::Show => describe(&self.validator.load_state()),
            Command::Json => serde_json::to_string_pretty(&self.validator.load_state())
                .unwrap_or_else(|e| format!("Failed to serialize settings: {}", e)),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }
}

fn field_response(label: &str, update: FieldUpdate) -> String {
    match update.error {
        None => format!("{}: {}", label, update.display),
        Some(e) => format!("{}: {} ({})", label, update.display, e),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn describe(state: &SettingsState) -> String {
    format!(
        "Default tip: {}\nMax tip: {}\nAppearance: {}\nSmooth slider: {}",
        state.default_tip,
        state.max_tip,
        state.appearance,
        on_off(state.smooth_slider)
    )
}
