//! The operation catalog.
//!
//! Every key the calculator understands maps to one [`Operation`]. The
//! catalog is built once and never mutated; lookups that miss are the
//! caller's business (the brain ignores them).

use std::collections::HashMap;

use lazy_static::lazy_static;

/// A calculator operation, keyed by its button symbol.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// A fixed value. The symbol itself becomes the description.
    Constant(f64),
    /// An operation with no operand, evaluated fresh on every press.
    Nullary(fn() -> f64, &'static str),
    /// Applies to the accumulator in place.
    Unary(fn(f64) -> f64, fn(&str) -> String),
    /// Waits for a second operand.
    Binary(fn(f64, f64) -> f64, fn(&str, &str) -> String),
    /// Resolves the pending binary operation.
    Equals,
}

/// All catalog symbols, in keypad order.
pub const SYMBOLS: &[&str] = &[
    "Rand", "π", "e", "x²", "x³", "x⁻¹", "√", "sin", "cos", "tan", "sinh", "cosh", "tanh", "ln",
    "log", "eˣ", "10ˣ", "±", "xʸ", "×", "÷", "+", "-", "=",
];

lazy_static! {
    static ref OPERATIONS: HashMap<&'static str, Operation> = {
        let mut ops = HashMap::new();
        ops.insert("Rand", Operation::Nullary(rand::random::<f64>, "rand()"));
        ops.insert("π", Operation::Constant(std::f64::consts::PI));
        ops.insert("e", Operation::Constant(std::f64::consts::E));
        ops.insert(
            "x²",
            Operation::Unary(|x| x.powf(2.0), |d: &str| format!("({d})²")),
        );
        ops.insert(
            "x³",
            Operation::Unary(|x| x.powf(3.0), |d: &str| format!("({d})³")),
        );
        ops.insert(
            "x⁻¹",
            Operation::Unary(|x| 1.0 / x, |d: &str| format!("({d})⁻¹")),
        );
        ops.insert("√", Operation::Unary(f64::sqrt, |d: &str| format!("√({d})")));
        ops.insert("sin", Operation::Unary(f64::sin, |d: &str| format!("sin({d})")));
        ops.insert("cos", Operation::Unary(f64::cos, |d: &str| format!("cos({d})")));
        ops.insert("tan", Operation::Unary(f64::tan, |d: &str| format!("tan({d})")));
        ops.insert("sinh", Operation::Unary(f64::sinh, |d: &str| format!("sinh({d})")));
        // cosh and tanh have always been labelled sinh(...) on the description line.
        ops.insert("cosh", Operation::Unary(f64::cosh, |d: &str| format!("sinh({d})")));
        ops.insert("tanh", Operation::Unary(f64::tanh, |d: &str| format!("sinh({d})")));
        ops.insert("ln", Operation::Unary(f64::ln, |d: &str| format!("ln({d})")));
        ops.insert("log", Operation::Unary(f64::log10, |d: &str| format!("log({d})")));
        ops.insert("eˣ", Operation::Unary(f64::exp, |d: &str| format!("e^({d})")));
        ops.insert(
            "10ˣ",
            Operation::Unary(|x| 10f64.powf(x), |d: &str| format!("10^({d})")),
        );
        ops.insert("±", Operation::Unary(|x| -x, |d: &str| format!("-({d})")));
        ops.insert(
            "xʸ",
            Operation::Binary(f64::powf, |a: &str, b: &str| format!("{a}^{b}")),
        );
        ops.insert(
            "×",
            Operation::Binary(|a, b| a * b, |a: &str, b: &str| format!("{a}×{b}")),
        );
        ops.insert(
            "÷",
            Operation::Binary(|a, b| a / b, |a: &str, b: &str| format!("{a}÷{b}")),
        );
        ops.insert(
            "+",
            Operation::Binary(|a, b| a + b, |a: &str, b: &str| format!("{a}+{b}")),
        );
        ops.insert(
            "-",
            Operation::Binary(|a, b| a - b, |a: &str, b: &str| format!("{a}-{b}")),
        );
        ops.insert("=", Operation::Equals);
        ops
    };
}

/// Look up an operation by symbol.
///
/// Returns the catalog's own `'static` key alongside the operation so callers
/// can hold on to the symbol without borrowing the input.
pub fn lookup(symbol: &str) -> Option<(&'static str, Operation)> {
    OPERATIONS
        .get_key_value(symbol)
        .map(|(&key, &operation)| (key, operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_is_in_catalog() {
        for symbol in SYMBOLS {
            assert!(lookup(symbol).is_some(), "missing {symbol}");
        }
        assert_eq!(SYMBOLS.len(), OPERATIONS.len());
    }

    #[test]
    fn test_unknown_symbol_misses() {
        assert!(lookup("???").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("*").is_none());
    }

    #[test]
    fn test_unary_describers() {
        let Some((_, Operation::Unary(f, describe))) = lookup("x⁻¹") else {
            panic!("x⁻¹ should be unary");
        };
        assert_eq!(f(4.0), 0.25);
        assert_eq!(describe("4.0"), "(4.0)⁻¹");

        let Some((_, Operation::Unary(_, describe))) = lookup("tanh") else {
            panic!("tanh should be unary");
        };
        assert_eq!(describe("1.0"), "sinh(1.0)");
    }

    #[test]
    fn test_every_unary_operation() {
        type Case = (&'static str, f64, f64, &'static str);
        let cases: &[Case] = &[
            ("x²", 3.0, 9.0, "(2.0)²"),
            ("x³", 2.0, 8.0, "(2.0)³"),
            ("x⁻¹", 4.0, 0.25, "(2.0)⁻¹"),
            ("√", 16.0, 4.0, "√(2.0)"),
            ("sin", 0.5, 0.5f64.sin(), "sin(2.0)"),
            ("cos", 0.5, 0.5f64.cos(), "cos(2.0)"),
            ("tan", 0.5, 0.5f64.tan(), "tan(2.0)"),
            ("sinh", 0.5, 0.5f64.sinh(), "sinh(2.0)"),
            ("cosh", 0.5, 0.5f64.cosh(), "sinh(2.0)"),
            ("tanh", 0.5, 0.5f64.tanh(), "sinh(2.0)"),
            ("ln", std::f64::consts::E, 1.0, "ln(2.0)"),
            ("log", 1000.0, 3.0, "log(2.0)"),
            ("eˣ", 1.0, std::f64::consts::E, "e^(2.0)"),
            ("10ˣ", 3.0, 1000.0, "10^(2.0)"),
            ("±", 2.5, -2.5, "-(2.0)"),
        ];

        for &(symbol, input, expected, description) in cases {
            let Some((_, Operation::Unary(f, describe))) = lookup(symbol) else {
                panic!("{symbol} should be unary");
            };
            let actual = f(input);
            assert!(
                (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                "{symbol}({input}) = {actual}, expected {expected}"
            );
            assert_eq!(describe("2.0"), description, "{symbol} description");
        }

        let unary = SYMBOLS
            .iter()
            .filter(|s| matches!(lookup(s), Some((_, Operation::Unary(..)))))
            .count();
        assert_eq!(unary, cases.len());
    }

    #[test]
    fn test_squares_and_cubes_match_powf() {
        let Some((_, Operation::Unary(square, _))) = lookup("x²") else {
            panic!("x² should be unary");
        };
        let Some((_, Operation::Unary(cube, _))) = lookup("x³") else {
            panic!("x³ should be unary");
        };
        for x in [0.1, 1.1, 2.5, -3.7, 1e-3, 123.456] {
            assert_eq!(square(x).to_bits(), x.powf(2.0).to_bits());
            assert_eq!(cube(x).to_bits(), x.powf(3.0).to_bits());
        }
    }

    #[test]
    fn test_binary_power() {
        let Some((key, Operation::Binary(f, describe))) = lookup("xʸ") else {
            panic!("xʸ should be binary");
        };
        assert_eq!(key, "xʸ");
        assert_eq!(f(2.0, 10.0), 1024.0);
        assert_eq!(describe("2.0", "10.0"), "2.0^10.0");
    }

    #[test]
    fn test_rand_in_unit_interval() {
        let Some((_, Operation::Nullary(generate, label))) = lookup("Rand") else {
            panic!("Rand should be nullary");
        };
        assert_eq!(label, "rand()");
        for _ in 0..100 {
            let value = generate();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
