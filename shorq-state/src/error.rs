//! Error types for register operations

use thiserror::Error;

/// Errors that can occur during register operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Basis-state index outside `[0, 2^size)`
    #[error("Invalid basis state {index} for register of dimension {dimension}")]
    InvalidIndex { index: usize, dimension: usize },

    /// Replacement amplitudes have the wrong length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Register holds no probability mass, so it cannot be normalized
    #[error("Cannot normalize register: total probability is {total}")]
    ZeroNorm { total: f64 },

    /// Amplitude component is NaN or infinite
    #[error("Amplitude ({re}, {im}) is not finite")]
    NonFinite { re: f64, im: f64 },

    /// Register would not fit in memory
    #[error("Register of {num_qubits} qubits exceeds the {max_qubits}-qubit limit")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },
}

/// Result type for register operations
pub type Result<T> = std::result::Result<T, StateError>;
