//! Drives a [`Keypad`] from lines of text.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::calculator::{Command, Key, Keypad, SYMBOLS, classify, copy_display, tokenize};

/// Whether the caller should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Feed every token on `line` to the keypad.
///
/// Number tokens are keyed in digit by digit, so `1 2` types `12` just as
/// two key presses would. Help and copy messages are written to `out`.
pub fn feed_line(keypad: &mut Keypad, line: &str, out: &mut impl Write) -> io::Result<Flow> {
    let separator = keypad.format().decimal_separator;

    for token in tokenize(line) {
        match classify(token, separator) {
            Key::Number(digits) => {
                for key in digits.chars() {
                    if let Err(e) = keypad.touch_digit(key) {
                        warn!(error = %e, "Rejected key");
                    }
                }
            }
            Key::Operation(symbol) => keypad.perform_operation(symbol),
            Key::Unknown(token) => {
                debug!(token = %token, "Unrecognised token");
                keypad.perform_operation(&token);
            }
            Key::Command(Command::Reset) => keypad.reset(),
            Key::Command(Command::Backspace) => keypad.backspace(),
            Key::Command(Command::Copy) => match copy_display(keypad) {
                Ok(text) => writeln!(out, "copied {text}")?,
                Err(e) => warn!(error = %e, "Copy failed"),
            },
            Key::Command(Command::Help) => write_help(out)?,
            Key::Command(Command::Quit) => return Ok(Flow::Quit),
        }
    }

    Ok(Flow::Continue)
}

/// Print the description line above the display line.
pub fn write_display(keypad: &Keypad, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", keypad.description())?;
    writeln!(out, "{}", keypad.display())
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "operations: {}", SYMBOLS.join(" "))?;
    writeln!(out, "aliases: * / ^ pi sqrt rand neg exp inv sq cube")?;
    writeln!(out, "commands: c (reset), back, copy, help, quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keypad: &mut Keypad, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = feed_line(keypad, line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_chained_expression() {
        let mut keypad = Keypad::default();
        let (flow, _) = run(&mut keypad, "2 + 3 * 4 =");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(keypad.display(), "20");
        assert_eq!(keypad.description(), "((2+3)×4)=");
    }

    #[test]
    fn test_state_carries_across_lines() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "10 ÷");
        assert_eq!(keypad.description(), "10÷…");
        run(&mut keypad, "4 =");
        assert_eq!(keypad.display(), "2.5");
    }

    #[test]
    fn test_adjacent_numbers_concatenate() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "1 2 sq");
        assert_eq!(keypad.display(), "144");
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "7 × bogus 6 =");
        assert_eq!(keypad.display(), "42");
    }

    #[test]
    fn test_commands() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "123 back");
        assert_eq!(keypad.display(), "12");

        run(&mut keypad, "+ c");
        assert_eq!(keypad.display(), "0");
        assert_eq!(keypad.description(), " ");

        let (flow, _) = run(&mut keypad, "5 quit 6");
        assert_eq!(flow, Flow::Quit);
        assert_eq!(keypad.display(), "5");
    }

    #[test]
    fn test_help_lists_symbols() {
        let mut keypad = Keypad::default();
        let (_, out) = run(&mut keypad, "help");
        assert!(out.contains("xʸ"));
        assert!(out.contains("commands:"));
    }

    #[test]
    fn test_write_display() {
        let mut keypad = Keypad::default();
        run(&mut keypad, "9 sqrt");
        let mut out = Vec::new();
        write_display(&keypad, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "√(9)=\n3\n");
    }
}
