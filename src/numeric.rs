//! The scalar arithmetic backend.
//!
//! Construction delegates every value computation here; failures surface
//! to the caller unchanged and no node is allocated for a failed call.

use crate::store::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("power of {base} by {exponent} has no real value")]
    InvalidPower { base: f64, exponent: f64 },
}

/// Applies a single binary operator to two scalars.
pub fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, NumericError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide => {
            if rhs == 0.0 {
                Err(NumericError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        Operator::Power => {
            let out = lhs.powf(rhs);
            // powf returns NaN for e.g. a negative base with a fractional
            // exponent; a NaN produced from non-NaN inputs is a domain error.
            if out.is_nan() && !lhs.is_nan() && !rhs.is_nan() {
                Err(NumericError::InvalidPower { base: lhs, exponent: rhs })
            } else {
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operator::Add, 1.0, 2.0, 3.0)]
    #[case(Operator::Subtract, 5.0, 2.0, 3.0)]
    #[case(Operator::Multiply, 4.0, 2.5, 10.0)]
    #[case(Operator::Divide, 9.0, 3.0, 3.0)]
    #[case(Operator::Power, 2.0, 10.0, 1024.0)]
    #[case(Operator::Power, 4.0, 0.5, 2.0)]
    fn test_apply_computes_expected_value(
        #[case] op: Operator,
        #[case] lhs: f64,
        #[case] rhs: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(apply(op, lhs, rhs).unwrap(), expected);
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert_eq!(apply(Operator::Divide, 1.0, 0.0), Err(NumericError::DivisionByZero));
        assert_eq!(apply(Operator::Divide, 1.0, -0.0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_power_domain_error() {
        let err = apply(Operator::Power, -1.0, 0.5).unwrap_err();
        assert_eq!(err, NumericError::InvalidPower { base: -1.0, exponent: 0.5 });
    }

    #[test]
    fn test_power_of_negative_base_with_integer_exponent_is_fine() {
        assert_eq!(apply(Operator::Power, -2.0, 3.0).unwrap(), -8.0);
    }
}
