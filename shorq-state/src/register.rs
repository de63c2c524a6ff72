//! Quantum register state vector
//!
//! A [`QuantumRegister`] of `size` qubits stores `2^size` amplitudes, one per
//! basis state. Measurement is destructive: it collapses the register onto
//! the observed basis state.

use crate::amplitude::Amplitude;
use crate::error::{Result, StateError};
use crate::random::RandomSource;

/// Largest register the simulator will allocate
pub const MAX_QUBITS: usize = 30;

/// Tolerance used by [`QuantumRegister::is_normalized`] callers in this crate
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Ordered vector of amplitudes indexed by basis state
///
/// # Example
/// ```
/// use shorq_state::{Amplitude, QuantumRegister};
///
/// let mut reg = QuantumRegister::new(2).unwrap();
/// reg.set_state(&[Amplitude::ONE; 4]).unwrap();
/// reg.normalize().unwrap();
/// assert!(reg.is_normalized(1e-9));
/// assert!(reg.amplitude(3).unwrap().equals(Amplitude::new(0.5, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumRegister {
    /// Number of qubits
    size: usize,

    /// Amplitudes, `2^size` of them
    amplitudes: Vec<Amplitude>,
}

impl QuantumRegister {
    /// Create a register of `size` qubits with every amplitude zero
    ///
    /// # Errors
    /// Returns [`StateError::TooManyQubits`] above [`MAX_QUBITS`].
    pub fn new(size: usize) -> Result<Self> {
        if size > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits: size,
                max_qubits: MAX_QUBITS,
            });
        }

        Ok(Self {
            size,
            amplitudes: vec![Amplitude::ZERO; 1 << size],
        })
    }

    /// Number of qubits
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of basis states (`2^size`)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// All amplitudes in basis-state order
    #[inline]
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`
    ///
    /// # Errors
    /// Returns [`StateError::InvalidIndex`] when `index >= 2^size`.
    pub fn amplitude(&self, index: usize) -> Result<Amplitude> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(StateError::InvalidIndex {
                index,
                dimension: self.dimension(),
            })
    }

    /// Probability of each basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Amplitude::norm_sqr).collect()
    }

    /// Sum of all squared magnitudes
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(Amplitude::norm_sqr).sum()
    }

    /// Check `|total probability - 1| < epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total_probability() - 1.0).abs() < epsilon
    }

    /// Scale every amplitude by `b^(-1/2)`, where `b` is the total probability
    ///
    /// # Errors
    /// Returns [`StateError::ZeroNorm`] when the register holds no
    /// probability mass (or the total is not finite).
    pub fn normalize(&mut self) -> Result<()> {
        let total = self.total_probability();
        if total == 0.0 || !total.is_finite() {
            return Err(StateError::ZeroNorm { total });
        }

        let factor = total.powf(-0.5);
        for amplitude in &mut self.amplitudes {
            *amplitude = amplitude.scale(factor);
        }
        Ok(())
    }

    /// Replace every amplitude with a copy of `new_state`
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] unless
    /// `new_state.len() == 2^size`.
    pub fn set_state(&mut self, new_state: &[Amplitude]) -> Result<()> {
        if new_state.len() != self.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: new_state.len(),
            });
        }

        self.amplitudes.copy_from_slice(new_state);
        Ok(())
    }

    /// Put basis states `0..=count` into amplitude `count^(-1/2)`
    ///
    /// The range is inclusive: `count + 1` states are written, so the total
    /// probability afterwards is `(count + 1) / count` rather than one.
    /// States above `count` keep their previous amplitudes.
    ///
    /// # Errors
    /// - [`StateError::InvalidIndex`] when `count` is not a basis state
    /// - [`StateError::NonFinite`] when `count == 0`
    pub fn set_equal_superposition(&mut self, count: usize) -> Result<()> {
        if count >= self.dimension() {
            return Err(StateError::InvalidIndex {
                index: count,
                dimension: self.dimension(),
            });
        }

        let amplitude = Amplitude::try_new((count as f64).powf(-0.5), 0.0)?;
        self.amplitudes[..=count].fill(amplitude);
        Ok(())
    }

    /// Reset every amplitude to zero
    pub fn reset(&mut self) {
        self.amplitudes.fill(Amplitude::ZERO);
    }

    /// Measure the register and collapse it onto the outcome
    ///
    /// Draws `r` from `[0, 1)` and returns the first basis state whose
    /// cumulative probability exceeds `r`. That state is set to `(1, 0)` and
    /// every other state to `(0, 0)`.
    ///
    /// Returns `None` when rounding leaves the cumulative probability at or
    /// below `r` for the whole scan. The register is untouched in that case
    /// and the caller should treat the measurement as inconclusive.
    pub fn measure_and_collapse<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let r = rng.next_unit();

        let mut cumulative = 0.0;
        let outcome = self.amplitudes.iter().position(|amplitude| {
            cumulative += amplitude.norm_sqr();
            cumulative > r
        });

        match outcome {
            Some(index) => {
                self.collapse_to(index);
                tracing::trace!(index, draw = r, "register collapsed");
            }
            None => {
                tracing::trace!(draw = r, cumulative, "measurement inconclusive");
            }
        }

        outcome
    }

    fn collapse_to(&mut self, index: usize) {
        self.amplitudes.fill(Amplitude::ZERO);
        self.amplitudes[index] = Amplitude::ONE;
    }
}
