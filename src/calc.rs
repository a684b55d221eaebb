//! Enumerated calculations exposed through `/calculate`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest `value` accepted by `/calculate`.
///
/// `Multiply` doubles on every even step, so the bound keeps results finite.
pub const MAX_CALC_VALUE: i64 = 1000;

/// Calculation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The operation name does not match any [`Operation`].
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

/// Supported calculation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(CalcError::UnknownOperation(s.to_string())),
        }
    }
}

/// Run `operation` over `0..value`.
///
/// Non-positive values always yield `0.0`.
///
/// # Examples
///
/// ```
/// use sample_app::calc::{calculate, Operation};
///
/// assert_eq!(calculate(5, Operation::Multiply), 8.0);
/// assert_eq!(calculate(0, Operation::Add), 0.0);
/// ```
pub fn calculate(value: i64, operation: Operation) -> f64 {
    if value <= 0 {
        return 0.0;
    }
    match operation {
        Operation::Add => alternating_sum(value),
        Operation::Multiply => doubling_product(value),
    }
}

fn alternating_sum(value: i64) -> f64 {
    (0..value)
        .map(|i| {
            let x = i as f64;
            if i % 2 == 0 {
                if i % 3 == 0 {
                    x * 2.0
                } else {
                    x
                }
            } else if i % 5 == 0 {
                -x
            } else {
                x / 2.0
            }
        })
        .sum()
}

fn doubling_product(value: i64) -> f64 {
    (0..value)
        .map(|i| if i % 2 == 0 { 2.0 } else { 1.0 })
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("MULTIPLY".parse::<Operation>(), Ok(Operation::Multiply));
    }

    #[test]
    fn test_operation_from_str_unknown() {
        assert_eq!(
            "divide".parse::<Operation>(),
            Err(CalcError::UnknownOperation("divide".to_string()))
        );
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_display_roundtrip() {
        for op in [Operation::Add, Operation::Multiply] {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_non_positive_value() {
        assert_eq!(calculate(0, Operation::Add), 0.0);
        assert_eq!(calculate(-3, Operation::Multiply), 0.0);
    }

    #[test]
    fn test_add() {
        // i=0: 0, i=1: 0.5, i=2: 2, i=3: 1.5, i=4: 4, i=5: -5
        assert_eq!(calculate(1, Operation::Add), 0.0);
        assert_eq!(calculate(4, Operation::Add), 4.0);
        assert_eq!(calculate(6, Operation::Add), 3.0);
        // i=6: 12
        assert_eq!(calculate(7, Operation::Add), 15.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(calculate(1, Operation::Multiply), 2.0);
        assert_eq!(calculate(2, Operation::Multiply), 2.0);
        assert_eq!(calculate(5, Operation::Multiply), 8.0);
        assert_eq!(calculate(10, Operation::Multiply), 32.0);
    }

    #[test]
    fn test_max_value_is_finite() {
        assert!(calculate(MAX_CALC_VALUE, Operation::Multiply).is_finite());
        assert!(calculate(MAX_CALC_VALUE, Operation::Add).is_finite());
    }
}
