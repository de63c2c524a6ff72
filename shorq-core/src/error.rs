//! Error types for shorq integer arithmetic

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the number-theory routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ArithmeticError {
    /// Euclid's algorithm was asked to reduce modulo zero
    #[error("gcd({a}, {b}) is undefined: operand is zero")]
    ZeroOperand { a: u64, b: u64 },

    /// Modular arithmetic with a zero modulus
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// A result would not fit in a native integer
    #[error("{operation} overflows for input {input}")]
    Overflow {
        operation: &'static str,
        input: u64,
    },
}

impl ArithmeticError {
    /// Create a zero-operand gcd error
    pub fn zero_operand(a: u64, b: u64) -> Self {
        Self::ZeroOperand { a, b }
    }

    /// Create an overflow error for the named operation
    pub fn overflow(operation: &'static str, input: u64) -> Self {
        Self::Overflow { operation, input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_operand_error() {
        let err = ArithmeticError::zero_operand(15, 0);
        let msg = format!("{}", err);
        assert!(msg.contains("15"));
        assert!(msg.contains("zero"));
    }

    #[test]
    fn test_overflow_error() {
        let err = ArithmeticError::overflow("q search", 1 << 40);
        let msg = err.to_string();
        assert!(msg.contains("q search"));
        assert!(msg.contains(&(1u64 << 40).to_string()));
    }
}
