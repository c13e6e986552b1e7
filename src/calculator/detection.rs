//! Token detection for the text front end.
//!
//! Decides what a whitespace-separated token typed at the prompt stands for:
//! a number to key in, a calculator operation, or a session command.

use super::operation;

/// ASCII spellings for keys that are awkward to type.
const ALIASES: &[(&str, &str)] = &[
    ("*", "×"),
    ("/", "÷"),
    ("^", "xʸ"),
    ("pi", "π"),
    ("sqrt", "√"),
    ("rand", "Rand"),
    ("neg", "±"),
    ("exp", "eˣ"),
    ("inv", "x⁻¹"),
    ("sq", "x²"),
    ("cube", "x³"),
];

/// Session commands that are not calculator operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Reset,
    Backspace,
    Copy,
    Help,
    Quit,
}

/// What a single token means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Digits (and at most the decimal separator) to be keyed in one by one.
    Number(String),
    /// A catalog operation.
    Operation(&'static str),
    Command(Command),
    /// Not recognised. Still forwarded to the brain, which ignores it.
    Unknown(String),
}

/// Split an input line into tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Classify a single token.
pub fn classify(token: &str, decimal_separator: char) -> Key {
    if is_number(token, decimal_separator) {
        return Key::Number(token.to_string());
    }

    if let Some(command) = command(token) {
        return Key::Command(command);
    }

    if let Some((symbol, _)) = operation::lookup(token) {
        return Key::Operation(symbol);
    }

    let lower = token.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|&(_, symbol)| Key::Operation(symbol))
        .unwrap_or_else(|| Key::Unknown(token.to_string()))
}

fn is_number(token: &str, decimal_separator: char) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == decimal_separator)
}

fn command(token: &str) -> Option<Command> {
    match token.to_lowercase().as_str() {
        "c" | "clear" | "reset" => Some(Command::Reset),
        "back" | "⌫" => Some(Command::Backspace),
        "copy" => Some(Command::Copy),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}
