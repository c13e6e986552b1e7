//! Keypad session.
//!
//! Wraps a [`CalculatorBrain`] with the state a calculator front panel keeps:
//! the number being typed, the main display and the description line.

use thiserror::Error;
use tracing::debug;

use super::brain::CalculatorBrain;
use super::formatting::{DisplayFormat, beautify, format_number, parse_display};

/// Errors from pressing keys on the keypad.
#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("'{0}' is not a digit or the decimal separator")]
    NotADigit(char),
}

/// A calculator session driven by key presses.
#[derive(Clone, Debug)]
pub struct Keypad {
    brain: CalculatorBrain,
    format: DisplayFormat,
    display: String,
    description: String,
    typing: bool,
}

impl Keypad {
    pub fn new(format: DisplayFormat) -> Self {
        Self {
            brain: CalculatorBrain::new(),
            display: format_number(0.0, &format),
            description: " ".to_string(),
            typing: false,
            format,
        }
    }

    /// Press a digit key or the decimal separator.
    pub fn touch_digit(&mut self, key: char) -> Result<(), KeyError> {
        let separator = self.format.decimal_separator;
        if !key.is_ascii_digit() && key != separator {
            return Err(KeyError::NotADigit(key));
        }

        if self.typing {
            // A second separator is swallowed.
            if key != separator || !self.display.contains(separator) {
                self.display.push(key);
            }
            return Ok(());
        }

        if key == separator {
            self.display = format!("0{separator}");
        } else if key == '0' && self.display == "0" {
            return Ok(());
        } else {
            self.display = key.to_string();
        }
        self.typing = true;
        debug!(display = %self.display, "Started typing");
        Ok(())
    }

    /// Delete the last typed character. Does nothing unless typing.
    pub fn backspace(&mut self) {
        if !self.typing {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "0" {
            self.display = "0".to_string();
            self.typing = false;
        }
    }

    /// Commit whatever is typed, then apply `symbol`.
    pub fn perform_operation(&mut self, symbol: &str) {
        if self.typing {
            match self.display_value() {
                Some(value) => self.brain.set_operand(value),
                None => debug!(display = %self.display, "Display is not a number"),
            }
            self.typing = false;
        }

        self.brain.perform_operation(symbol);

        self.description = match self.brain.description() {
            Some(description) => {
                let suffix = if self.brain.result_is_pending() { "…" } else { "=" };
                format!("{}{}", beautify(&description, &self.format), suffix)
            }
            None => " ".to_string(),
        };

        if let Some(result) = self.brain.result() {
            self.display = format_number(result, &self.format);
        }
    }

    /// Start over with a fresh brain.
    pub fn reset(&mut self) {
        self.brain = CalculatorBrain::new();
        self.display = format_number(0.0, &self.format);
        self.description = " ".to_string();
        self.typing = false;
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The number currently shown, parsed back from the display.
    pub fn display_value(&self) -> Option<f64> {
        parse_display(&self.display, &self.format)
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(DisplayFormat::default())
    }
}
