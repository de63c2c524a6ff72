//! Error types for the Shor simulator

use serde::Serialize;
use shorq_core::ArithmeticError;
use shorq_state::StateError;
use std::fmt;
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, ShorError>;

/// Why a target integer was rejected before any attempt ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputReason {
    /// `n` is even; 2 is a factor
    Even,
    /// `n` is 1
    TooSmall,
    /// `n` is prime
    Prime,
    /// `n` is a power of a single prime
    PrimePower,
    /// The registers for `n` would exceed the configured size limit
    TooLarge { qubits: usize, max_qubits: usize },
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputReason::Even => write!(f, "the number must be odd"),
            InvalidInputReason::TooSmall => write!(f, "the number must be at least 3"),
            InvalidInputReason::Prime => write!(f, "the number must not be prime"),
            InvalidInputReason::PrimePower => write!(f, "the number must not be a prime power"),
            InvalidInputReason::TooLarge { qubits, max_qubits } => write!(
                f,
                "the number needs a {}-qubit register, limit is {}",
                qubits, max_qubits
            ),
        }
    }
}

/// Errors that end a simulator run
///
/// Failures inside a single attempt (inconclusive measurements, odd periods,
/// trivial factors, gcd on zero) are not errors; they are recorded on the
/// attempt and the run moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShorError {
    /// The target failed validation; retrying will not help
    #[error("Cannot factor {n}: {reason}")]
    InvalidInput { n: u64, reason: InvalidInputReason },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arithmetic failure outside the per-attempt recovery path
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Register misuse (bad index or dimension)
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl ShorError {
    /// Create an invalid input error
    pub fn invalid_input(n: u64, reason: InvalidInputReason) -> Self {
        Self::InvalidInput { n, reason }
    }

    /// The validation reason, if this is an invalid-input error
    pub fn invalid_input_reason(&self) -> Option<InvalidInputReason> {
        match self {
            ShorError::InvalidInput { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
