//! Shor's factoring algorithm over simulated quantum registers
//!
//! This crate drives the full protocol: input validation, witness
//! selection, modular exponentiation into a second register, measurement,
//! the Fourier transform of the first register, and the continued-fraction
//! post-processing that turns a measurement into a factor candidate.
//!
//! # Features
//!
//! - **Injected randomness**: every draw comes from a caller-supplied
//!   [`RandomSource`](shorq_state::RandomSource), so seeded runs reproduce
//! - **Bounded retries**: attempts and witness draws are capped by
//!   [`ShorConfig`]
//! - **Per-attempt records**: every failure is kept with its reason
//! - **Observers**: step-by-step narration through [`ShorObserver`]
//!
//! # Example
//!
//! ```
//! use shorq_sim::{ShorConfig, ShorSimulator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let simulator = ShorSimulator::new(ShorConfig::default().with_statistics(true));
//! let mut rng = StdRng::seed_from_u64(5);
//!
//! let report = simulator.run(21, &mut rng).unwrap();
//! assert_eq!(report.q, 512);
//! assert!(report.statistics.is_some());
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod result;
pub mod simulator;
pub mod statistics;

pub use config::ShorConfig;
pub use error::{InvalidInputReason, Result, ShorError};
pub use observer::{EventLog, NoopObserver, ShorEvent, ShorObserver};
pub use result::{AttemptFailure, AttemptRecord, FactorOutcome, FactorReport};
pub use simulator::{factor, ShorSimulator};
pub use statistics::RunStatistics;
