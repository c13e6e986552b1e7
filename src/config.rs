//! Display configuration.
//!
//! Read from `~/.config/calcbrain/config.toml` (or the platform equivalent).
//! A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::calculator::DisplayFormat;

/// The largest fraction digit count that still round-trips through f64 text.
const MAX_FRACTION_DIGITS: usize = 15;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub decimal_separator: String,
    /// Empty disables grouping.
    pub grouping_separator: String,
    pub max_fraction_digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            max_fraction_digits: 12,
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Falls back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("calcbrain").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The decimal separator is a single character
    /// - The grouping separator is empty or a single character
    /// - Neither separator can appear in a rendered number (digits, signs,
    ///   letters of `inf`/`nan` or an exponent)
    /// - The two separators differ
    /// - The fraction digit count is at most 15
    pub fn validate(&self) -> Result<(), ConfigError> {
        let decimal = single_char(&self.decimal_separator).ok_or_else(|| {
            ConfigError::ValidationError {
                message: format!(
                    "decimal_separator must be a single character, got '{}'",
                    self.decimal_separator
                ),
            }
        })?;

        check_separator("decimal_separator", decimal)?;
        if decimal.is_whitespace() {
            return Err(ConfigError::ValidationError {
                message: "decimal_separator must not be whitespace".to_string(),
            });
        }

        if !self.grouping_separator.is_empty() {
            let grouping = single_char(&self.grouping_separator).ok_or_else(|| {
                ConfigError::ValidationError {
                    message: format!(
                        "grouping_separator must be empty or a single character, got '{}'",
                        self.grouping_separator
                    ),
                }
            })?;
            check_separator("grouping_separator", grouping)?;
            if grouping == decimal {
                return Err(ConfigError::ValidationError {
                    message: "grouping_separator and decimal_separator must differ".to_string(),
                });
            }
        }

        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_fraction_digits must be at most {}, got {}",
                    MAX_FRACTION_DIGITS, self.max_fraction_digits
                ),
            });
        }

        Ok(())
    }

    /// The display format described by this config.
    ///
    /// Call [`validate`](Self::validate) first; unvalidated separators fall
    /// back to the defaults.
    pub fn display_format(&self) -> DisplayFormat {
        let defaults = DisplayFormat::default();
        DisplayFormat {
            decimal_separator: single_char(&self.decimal_separator)
                .unwrap_or(defaults.decimal_separator),
            grouping_separator: single_char(&self.grouping_separator),
            max_fraction_digits: self.max_fraction_digits,
        }
    }
}

/// Reject separators that collide with characters of a rendered number.
fn check_separator(name: &str, separator: char) -> Result<(), ConfigError> {
    if separator.is_ascii_digit() || separator.is_ascii_alphabetic() || "+-".contains(separator)
    {
        return Err(ConfigError::ValidationError {
            message: format!("{name} must not be a digit, letter or sign, got '{separator}'"),
        });
    }
    Ok(())
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
