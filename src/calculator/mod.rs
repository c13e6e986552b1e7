//! Calculator module.
//!
//! This module provides:
//! - The left-to-right evaluation engine and its operation catalog
//! - A keypad session that turns key presses into engine calls
//! - Number formatting for the display and description lines
//! - Token detection for the text front end
//! - Copying results to the clipboard

mod brain;
mod clipboard;
mod detection;
mod formatting;
mod keypad;
mod operation;

pub use brain::{CalculatorBrain, describe_operand};
pub use clipboard::{clipboard_text, copy_display, copy_to_clipboard};
pub use detection::{Command, Key, classify, tokenize};
pub use formatting::{DisplayFormat, beautify, format_number, format_raw, parse_display};
pub use keypad::{KeyError, Keypad};
pub use operation::{Operation, SYMBOLS, lookup};
