//! Number formatting for the display and description lines.
//!
//! The brain describes operands as `2.0`, `0.5` and so on. Before they reach
//! the screen every number is rounded to a fixed number of fraction digits,
//! stripped of trailing zeros, and grouped in thousands.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A run of digits and dots, e.g. the `12.50` in `√(12.50)`.
    static ref NUMBER_RUN: Regex = Regex::new(r"[.0-9]+").unwrap();
}

/// How numbers are rendered for display.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFormat {
    pub decimal_separator: char,
    /// `None` disables thousands grouping.
    pub grouping_separator: Option<char>,
    pub max_fraction_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: Some(','),
            max_fraction_digits: 12,
        }
    }
}

/// Format a number for display with the configured separators.
pub fn format_number(value: f64, format: &DisplayFormat) -> String {
    render(
        value,
        format.max_fraction_digits,
        format.decimal_separator,
        format.grouping_separator,
    )
}

/// Format a number for the clipboard (no grouping, `.` as decimal point).
pub fn format_raw(value: f64, format: &DisplayFormat) -> String {
    render(value, format.max_fraction_digits, '.', None)
}

/// Reformat every number embedded in `text`.
///
/// Runs that are not valid numbers (a lone `.`) are left alone.
pub fn beautify(text: &str, format: &DisplayFormat) -> String {
    NUMBER_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            match run.parse::<f64>() {
                Ok(value) => format_number(value, format),
                Err(_) => run.to_string(),
            }
        })
        .into_owned()
}

/// Parse display text back into a number.
pub fn parse_display(text: &str, format: &DisplayFormat) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|&c| Some(c) != format.grouping_separator)
        .map(|c| if c == format.decimal_separator { '.' } else { c })
        .collect();
    cleaned.parse().ok()
}

fn render(value: f64, fraction_digits: usize, decimal: char, grouping: Option<char>) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return text.to_string();
    }

    let formatted = format!("{:.*}", fraction_digits, value.abs());
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let mut result = String::new();
    // Rounding can turn a tiny negative into zero; don't show "-0".
    if value.is_sign_negative() && trimmed != "0" {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, grouping));
    if !frac_part.is_empty() {
        result.push(decimal);
        result.push_str(frac_part);
    }
    result
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn european() -> DisplayFormat {
        DisplayFormat {
            decimal_separator: ',',
            grouping_separator: Some('.'),
            max_fraction_digits: 12,
        }
    }

    #[test]
    fn test_integers_drop_fraction() {
        let format = DisplayFormat::default();
        assert_eq!(format_number(4.0, &format), "4");
        assert_eq!(format_number(0.0, &format), "0");
        assert_eq!(format_number(-12.0, &format), "-12");
    }

    #[test]
    fn test_thousand_separators() {
        let format = DisplayFormat::default();
        assert_eq!(format_number(1000.0, &format), "1,000");
        assert_eq!(format_number(1_000_000.0, &format), "1,000,000");
        assert_eq!(format_number(-1234567.5, &format), "-1,234,567.5");
        assert_eq!(format_number(999.0, &format), "999");
    }

    #[test]
    fn test_fraction_digits_are_capped() {
        let format = DisplayFormat::default();
        assert_eq!(format_number(1.0 / 3.0, &format), "0.333333333333");
        assert_eq!(format_number(0.1 + 0.2, &format), "0.3");

        let short = DisplayFormat {
            max_fraction_digits: 2,
            ..DisplayFormat::default()
        };
        assert_eq!(format_number(2.0 / 3.0, &short), "0.67");
    }

    #[test]
    fn test_negative_zero_after_rounding() {
        let format = DisplayFormat::default();
        assert_eq!(format_number(-1e-20, &format), "0");
        assert_eq!(format_number(-0.0, &format), "0");
    }

    #[test]
    fn test_special_values() {
        let format = DisplayFormat::default();
        assert_eq!(format_number(f64::INFINITY, &format), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, &format), "-inf");
        assert_eq!(format_number(f64::NAN, &format), "nan");
    }

    #[test]
    fn test_custom_separators() {
        assert_eq!(format_number(1234.5, &european()), "1.234,5");

        let ungrouped = DisplayFormat {
            grouping_separator: None,
            ..DisplayFormat::default()
        };
        assert_eq!(format_number(1234.5, &ungrouped), "1234.5");
    }

    #[test]
    fn test_raw_format_for_clipboard() {
        assert_eq!(format_raw(1234567.25, &european()), "1234567.25");
        assert_eq!(format_raw(1e6, &DisplayFormat::default()), "1000000");
    }

    #[test]
    fn test_beautify_description() {
        let format = DisplayFormat::default();
        assert_eq!(beautify("((2.0+3.0)×4.0)", &format), "((2+3)×4)");
        assert_eq!(beautify("√(12500.0)", &format), "√(12,500)");
        assert_eq!(beautify("π×rand()", &format), "π×rand()");
        assert_eq!(beautify("1.5÷.", &format), "1.5÷.");
    }

    #[test]
    fn test_parse_display() {
        let format = DisplayFormat::default();
        assert_eq!(parse_display("1,234.5", &format), Some(1234.5));
        assert_eq!(parse_display("0.", &format), Some(0.0));
        assert_eq!(parse_display("", &format), None);
        assert_eq!(parse_display("1.234,5", &european()), Some(1234.5));
    }
}
