//! Integer arithmetic for the shorq Shor's-algorithm simulator
//!
//! This crate holds the classical half of Shor's algorithm:
//! - primality and prime-power screening of the target
//! - [`gcd`] and [`mod_pow`] for witness selection and factor extraction
//! - register sizing ([`bit_length`], [`smallest_power_of_two_at_least_square`])
//! - continued-fraction period recovery ([`best_denominator`])
//!
//! # Example
//! ```
//! use shorq_core::{best_denominator, gcd, mod_pow};
//!
//! assert_eq!(mod_pow(2, 10, 1000).unwrap(), 24);
//! assert_eq!(gcd(48, 18).unwrap(), 6);
//! assert_eq!(best_denominator(1.0 / 3.0, 10), 3);
//! ```

pub mod error;
pub mod number_theory;

pub use error::ArithmeticError;
pub use number_theory::{
    best_denominator, bit_length, gcd, is_even, is_prime, is_prime_power, mod_pow,
    numerator_for, smallest_power_of_two_at_least_square,
};

/// Result type for shorq arithmetic
pub type Result<T> = std::result::Result<T, ArithmeticError>;
