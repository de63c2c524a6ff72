//! Discrete Fourier transform standing in for the quantum Fourier transform
//!
//! Maps basis state `a` to `q^(-1/2) * Σ_c e^{2πi·a·c/q} |c⟩`. A quantum
//! computer does this with `O(log² q)` gates; here it is an `O(q²)` sum over
//! every pair of input and output states, which is what bounds the size of
//! the numbers the simulator can factor.

use crate::amplitude::Amplitude;
use crate::error::{Result, StateError};
use crate::register::QuantumRegister;
use std::f64::consts::TAU;

/// Tuning knobs for [`FourierTransform`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierConfig {
    /// Input states with squared magnitude at or below this are skipped
    ///
    /// Their contribution is lost in the final normalization anyway, and
    /// skipping them keeps earlier round-off from spreading.
    ///
    /// Default: 1e-14
    pub skip_threshold: f64,

    /// Number of input states between progress reports
    ///
    /// Default: 100
    pub progress_interval: usize,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            skip_threshold: 1e-14,
            progress_interval: 100,
        }
    }
}

impl FourierConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skip threshold
    pub fn with_skip_threshold(mut self, threshold: f64) -> Self {
        self.skip_threshold = threshold;
        self
    }

    /// Set the progress interval
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// Fourier transform over the first `q` basis states of a register
///
/// # Example
/// ```
/// use shorq_state::{Amplitude, FourierTransform, QuantumRegister};
///
/// // |0⟩ transforms into the uniform superposition
/// let mut reg = QuantumRegister::new(3).unwrap();
/// let mut state = vec![Amplitude::ZERO; 8];
/// state[0] = Amplitude::ONE;
/// reg.set_state(&state).unwrap();
///
/// FourierTransform::default().apply(&mut reg, 8).unwrap();
/// for amp in reg.amplitudes() {
///     assert!((amp.norm_sqr() - 0.125).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FourierTransform {
    config: FourierConfig,
}

impl FourierTransform {
    /// Create a transform with the given configuration
    pub fn new(config: FourierConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &FourierConfig {
        &self.config
    }

    /// Transform `register` in place
    ///
    /// # Errors
    /// - [`StateError::DimensionMismatch`] unless `q` equals the register
    ///   dimension
    /// - [`StateError::ZeroNorm`] when the register holds no probability
    pub fn apply(&self, register: &mut QuantumRegister, q: usize) -> Result<()> {
        self.apply_with_progress(register, q, &mut |_: f64| {})
    }

    /// Transform `register` in place, reporting percentage complete
    ///
    /// `progress` receives `100 * a / (q - 1)` after every
    /// `progress_interval` input states `a`. It has no influence on the
    /// result.
    #[tracing::instrument(level = "debug", skip(self, register, progress))]
    pub fn apply_with_progress(
        &self,
        register: &mut QuantumRegister,
        q: usize,
        progress: &mut dyn FnMut(f64),
    ) -> Result<()> {
        if q == 0 || q != register.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: register.dimension(),
                actual: q,
            });
        }

        let twiddles = twiddle_table(q);
        let mut output = vec![Amplitude::ZERO; q];
        let last = (q - 1).max(1) as f64;
        let interval = self.config.progress_interval.max(1);
        let mut skipped = 0usize;

        for (a, &input) in register.amplitudes().iter().enumerate() {
            if input.norm_sqr() > self.config.skip_threshold {
                // k tracks a·c mod q without forming a·c
                let mut k = 0usize;
                for out in output.iter_mut() {
                    *out = *out + input * twiddles[k];
                    k += a;
                    if k >= q {
                        k -= q;
                    }
                }
            } else {
                skipped += 1;
            }

            if (a + 1) % interval == 0 {
                progress(100.0 * a as f64 / last);
            }
        }

        tracing::debug!(skipped, "fourier transform summed");

        register.set_state(&output)?;
        register.normalize()
    }
}

/// Transform `register` with the default configuration
pub fn transform(register: &mut QuantumRegister, q: usize) -> Result<()> {
    FourierTransform::default().apply(register, q)
}

/// `q^(-1/2) * e^{2πik/q}` for `k` in `0..q`
fn twiddle_table(q: usize) -> Vec<Amplitude> {
    let scale = (q as f64).powf(-0.5);
    (0..q)
        .map(|k| Amplitude::from_polar(scale, TAU * k as f64 / q as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomSource;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn register_from(size: usize, state: &[Amplitude]) -> QuantumRegister {
        let mut reg = QuantumRegister::new(size).unwrap();
        reg.set_state(state).unwrap();
        reg
    }

    fn naive_dft(state: &[Complex64]) -> Vec<Complex64> {
        let q = state.len();
        let scale = (q as f64).powf(-0.5);
        (0..q)
            .map(|c| {
                state
                    .iter()
                    .enumerate()
                    .map(|(a, amp)| {
                        let phase = TAU * (a * c) as f64 / q as f64;
                        amp * Complex64::from_polar(scale, phase)
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn test_zero_state_to_uniform() {
        let mut state = vec![Amplitude::ZERO; 16];
        state[0] = Amplitude::ONE;
        let mut reg = register_from(4, &state);

        transform(&mut reg, 16).unwrap();

        for amp in reg.amplitudes() {
            assert_relative_eq!(amp.re(), 0.25, epsilon = 1e-12);
            assert_relative_eq!(amp.im(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_periodic_state_peaks() {
        // period 4 over q = 16: peaks at multiples of 16 / 4
        let state: Vec<Amplitude> = (0..16)
            .map(|a| if a % 4 == 1 { Amplitude::ONE } else { Amplitude::ZERO })
            .collect();
        let mut reg = register_from(4, &state);
        reg.normalize().unwrap();

        transform(&mut reg, 16).unwrap();

        let probs = reg.probabilities();
        for (c, p) in probs.iter().enumerate() {
            if c % 4 == 0 {
                assert_relative_eq!(*p, 0.25, epsilon = 1e-12);
            } else {
                assert_relative_eq!(*p, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_matches_naive_dft() {
        let mut rng = StdRng::seed_from_u64(5);
        let state: Vec<Amplitude> = (0..32)
            .map(|_| Amplitude::new(rng.next_unit() - 0.5, rng.next_unit() - 0.5))
            .collect();
        let mut reg = register_from(5, &state);
        reg.normalize().unwrap();
        let normalized: Vec<Complex64> = reg.amplitudes().iter().map(|&a| a.into()).collect();

        FourierTransform::new(FourierConfig::new().with_skip_threshold(0.0))
            .apply(&mut reg, 32)
            .unwrap();

        for (got, want) in reg.amplitudes().iter().zip(naive_dft(&normalized)) {
            assert_relative_eq!(got.re(), want.re, epsilon = 1e-10);
            assert_relative_eq!(got.im(), want.im, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_result_is_normalized() {
        let state: Vec<Amplitude> = (0..64)
            .map(|a| if a % 6 == 0 { Amplitude::ONE } else { Amplitude::ZERO })
            .collect();
        let mut reg = register_from(6, &state);
        reg.normalize().unwrap();

        transform(&mut reg, 64).unwrap();
        assert!(reg.is_normalized(1e-9));
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut reg = QuantumRegister::new(3).unwrap();
        assert_eq!(
            transform(&mut reg, 16),
            Err(StateError::DimensionMismatch {
                expected: 8,
                actual: 16
            })
        );
    }

    #[test]
    fn test_empty_register_fails() {
        let mut reg = QuantumRegister::new(3).unwrap();
        assert!(matches!(
            transform(&mut reg, 8),
            Err(StateError::ZeroNorm { .. })
        ));
    }

    #[test]
    fn test_progress_reports() {
        let mut state = vec![Amplitude::ZERO; 256];
        state[3] = Amplitude::ONE;
        let mut reg = register_from(8, &state);

        let mut reports = Vec::new();
        FourierTransform::default()
            .apply_with_progress(&mut reg, 256, &mut |pct: f64| reports.push(pct))
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_relative_eq!(reports[0], 100.0 * 99.0 / 255.0, epsilon = 1e-12);
        assert_relative_eq!(reports[1], 100.0 * 199.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_progress_does_not_change_result() {
        let state: Vec<Amplitude> = (0..128)
            .map(|a| Amplitude::new((a % 3) as f64, (a % 5) as f64))
            .collect();
        let mut quiet = register_from(7, &state);
        let mut noisy = quiet.clone();

        transform(&mut quiet, 128).unwrap();
        FourierTransform::new(FourierConfig::new().with_progress_interval(7))
            .apply_with_progress(&mut noisy, 128, &mut |_: f64| {})
            .unwrap();

        assert_eq!(quiet, noisy);
    }
}
