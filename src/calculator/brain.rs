//! The evaluation engine.
//!
//! Operations are applied strictly in the order they are submitted, with at
//! most one binary operation waiting for its second operand. There is no
//! precedence: `2 + 3 × 4 =` is `(2 + 3) × 4`.

use tracing::{debug, trace};

use super::operation::{self, Operation};

/// A value together with the text that produced it.
#[derive(Clone, Debug, PartialEq)]
struct Accumulator {
    value: f64,
    description: String,
}

/// A binary operation waiting for its right-hand operand.
#[derive(Clone, Debug)]
struct PendingBinaryOperation {
    symbol: &'static str,
    combine: fn(f64, f64) -> f64,
    describe: fn(&str, &str) -> String,
    first_operand: Accumulator,
}

impl PendingBinaryOperation {
    fn perform(&self, second_operand: &Accumulator) -> Accumulator {
        Accumulator {
            value: (self.combine)(self.first_operand.value, second_operand.value),
            description: format!(
                "({})",
                (self.describe)(&self.first_operand.description, &second_operand.description)
            ),
        }
    }
}

/// Running calculator state.
///
/// Created empty, mutated in place by [`set_operand`](Self::set_operand) and
/// [`perform_operation`](Self::perform_operation), and replaced wholesale to
/// reset.
#[derive(Clone, Debug, Default)]
pub struct CalculatorBrain {
    accumulator: Option<Accumulator>,
    pending: Option<PendingBinaryOperation>,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accumulator with `operand`.
    pub fn set_operand(&mut self, operand: f64) {
        self.accumulator = Some(Accumulator {
            value: operand,
            description: describe_operand(operand),
        });
    }

    /// Apply the operation named by `symbol`.
    ///
    /// Unknown symbols, and unary or binary operations with nothing to act
    /// on, leave the state untouched.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some((symbol, operation)) = operation::lookup(symbol) else {
            debug!(symbol, "Ignoring unknown operation");
            return;
        };

        match operation {
            Operation::Constant(value) => {
                self.accumulator = Some(Accumulator {
                    value,
                    description: symbol.to_string(),
                });
            }
            Operation::Nullary(generate, label) => {
                self.accumulator = Some(Accumulator {
                    value: generate(),
                    description: label.to_string(),
                });
            }
            Operation::Unary(function, describe) => match self.accumulator.as_mut() {
                Some(acc) => {
                    acc.value = function(acc.value);
                    acc.description = describe(&acc.description);
                }
                None => debug!(symbol, "Unary operation without operand"),
            },
            Operation::Binary(combine, describe) => {
                self.resolve_pending();
                match self.accumulator.take() {
                    Some(first_operand) => {
                        self.pending = Some(PendingBinaryOperation {
                            symbol,
                            combine,
                            describe,
                            first_operand,
                        });
                    }
                    None => debug!(symbol, "Binary operation without left operand"),
                }
            }
            Operation::Equals => self.resolve_pending(),
        }
    }

    fn resolve_pending(&mut self) {
        let (Some(pending), Some(acc)) = (&self.pending, &self.accumulator) else {
            return;
        };
        let resolved = pending.perform(acc);
        trace!(
            symbol = pending.symbol,
            value = resolved.value,
            description = %resolved.description,
            "Resolved pending operation"
        );
        self.accumulator = Some(resolved);
        self.pending = None;
    }

    /// The current value, if any.
    pub fn result(&self) -> Option<f64> {
        self.accumulator.as_ref().map(|acc| acc.value)
    }

    pub fn result_is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The symbol of the pending binary operation, if any.
    pub fn pending_symbol(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|pending| pending.symbol)
    }

    /// Text describing the expression so far.
    ///
    /// While a binary operation is pending this previews it, using whatever
    /// is currently accumulated (or nothing) as the right-hand side.
    pub fn description(&self) -> Option<String> {
        match (&self.pending, &self.accumulator) {
            (Some(pending), acc) => Some((pending.describe)(
                &pending.first_operand.description,
                acc.as_ref().map_or("", |acc| acc.description.as_str()),
            )),
            (None, Some(acc)) => Some(acc.description.clone()),
            (None, None) => None,
        }
    }
}

/// Render an operand the way it appears on the description line: always with
/// a fractional part or an exponent (`2.0`, `1e+16`), `inf` and `nan` for the
/// special values.
pub fn describe_operand(operand: f64) -> String {
    if operand.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{operand:?}");
    if let Some((mantissa, exponent)) = text.split_once('e')
        && !exponent.starts_with('-')
    {
        return format!("{mantissa}e+{exponent}");
    }
    text
}
