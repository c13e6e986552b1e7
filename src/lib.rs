//! A four-function calculator engine.
//!
//! [`calculator::CalculatorBrain`] evaluates operations strictly left to
//! right with at most one pending binary operation. [`calculator::Keypad`]
//! wraps it with the typing and display state of a calculator front panel.

pub mod calculator;
pub mod config;
pub mod logging;
pub mod session;
