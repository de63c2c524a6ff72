//! Simulator configuration

use shorq_state::{FourierConfig, MAX_QUBITS};

/// Configuration for the Shor simulator
#[derive(Debug, Clone)]
pub struct ShorConfig {
    /// Maximum number of factoring attempts before giving up
    ///
    /// Each attempt picks a fresh witness and fresh registers. The run ends
    /// with "no factor found" once this many attempts have failed.
    ///
    /// Default: 5
    pub max_attempts: usize,

    /// Maximum witness draws per attempt
    ///
    /// A draw is rejected when it is `1` or shares a factor with `n`.
    /// Running out of draws fails the attempt.
    ///
    /// Default: 100
    pub max_witness_draws: usize,

    /// Largest register (in qubits) the simulator will build
    ///
    /// Register one has `log2(q)` qubits with `q >= n²`, and the Fourier
    /// transform costs `O(q²)`, so this bounds both memory and run time.
    ///
    /// Default: 24
    pub max_register_qubits: usize,

    /// Fourier transform settings (skip threshold, progress interval)
    pub fourier: FourierConfig,

    /// Enable run statistics collection
    ///
    /// Default: false
    pub collect_statistics: bool,

    /// Random number generator seed for [`run_seeded`](crate::ShorSimulator::run_seeded)
    ///
    /// If None, uses a random seed.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,
}

impl Default for ShorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            max_witness_draws: 100,
            max_register_qubits: 24,
            fourier: FourierConfig::default(),
            collect_statistics: false,
            seed: None,
        }
    }
}

impl ShorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for quick batch runs
    ///
    /// - More attempts per run
    /// - No Fourier progress reports
    pub fn fast() -> Self {
        Self {
            max_attempts: 10,
            fourier: FourierConfig::new().with_progress_interval(usize::MAX),
            ..Default::default()
        }
    }

    /// Create a configuration for debugging
    ///
    /// - Statistics collection
    /// - Deterministic seed
    pub fn debug() -> Self {
        Self {
            collect_statistics: true,
            seed: Some(42),
            ..Default::default()
        }
    }

    /// Set the maximum number of attempts
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the maximum witness draws per attempt
    pub fn with_max_witness_draws(mut self, draws: usize) -> Self {
        self.max_witness_draws = draws;
        self
    }

    /// Set the register size limit
    pub fn with_max_register_qubits(mut self, qubits: usize) -> Self {
        self.max_register_qubits = qubits;
        self
    }

    /// Set the Fourier transform configuration
    pub fn with_fourier(mut self, fourier: FourierConfig) -> Self {
        self.fourier = fourier;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be > 0".to_string());
        }

        if self.max_witness_draws == 0 {
            return Err("max_witness_draws must be > 0".to_string());
        }

        if self.max_register_qubits > MAX_QUBITS {
            return Err(format!(
                "max_register_qubits must be <= {}, got {}",
                MAX_QUBITS, self.max_register_qubits
            ));
        }

        if self.fourier.skip_threshold.is_nan() {
            return Err("fourier.skip_threshold must not be NaN".to_string());
        }

        Ok(())
    }
}
