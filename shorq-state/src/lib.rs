//! Simulated quantum registers for Shor's algorithm
//!
//! This crate provides the quantum half of the simulation:
//!
//! - [`Amplitude`]: an immutable complex probability amplitude
//! - [`QuantumRegister`]: a `2^n` amplitude state vector with normalization,
//!   state replacement and destructive measurement
//! - [`FourierTransform`]: the `O(q²)` discrete Fourier transform used in
//!   place of the quantum Fourier transform
//! - [`RandomSource`]: the injected source of measurement randomness
//!
//! # Example
//!
//! ```
//! use shorq_state::{Amplitude, QuantumRegister, transform};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // A state with period 4 over q = 16
//! let mut reg = QuantumRegister::new(4).unwrap();
//! let state: Vec<Amplitude> = (0..16)
//!     .map(|a| if a % 4 == 0 { Amplitude::ONE } else { Amplitude::ZERO })
//!     .collect();
//! reg.set_state(&state).unwrap();
//! reg.normalize().unwrap();
//!
//! transform(&mut reg, 16).unwrap();
//!
//! // Measurement now lands on a multiple of 16 / 4
//! let mut rng = StdRng::seed_from_u64(1);
//! let m = reg.measure_and_collapse(&mut rng).unwrap();
//! assert_eq!(m % 4, 0);
//! ```

pub mod amplitude;
pub mod error;
pub mod fourier;
pub mod random;
pub mod register;

pub use amplitude::{Amplitude, AMPLITUDE_TOLERANCE};
pub use error::{Result, StateError};
pub use fourier::{transform, FourierConfig, FourierTransform};
pub use random::{RandomSource, ScriptedSource};
pub use register::{QuantumRegister, MAX_QUBITS, NORMALIZATION_TOLERANCE};
