//! Run statistics tracking

use serde::Serialize;
use std::time::Duration;

/// Statistics for a factoring run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Total run time, validation included
    pub total_time: Duration,

    /// Time spent tabulating `x^a mod n` into register two
    pub modexp_time: Duration,

    /// Time spent in the Fourier transform
    pub fourier_time: Duration,

    /// Number of register measurements performed
    pub measurements: usize,

    /// Number of attempts started
    pub attempts: usize,

    /// Number of witness candidates drawn
    pub witness_draws: usize,
}

impl RunStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Fourier transform time as a percentage of total time
    pub fn fourier_percent(&self) -> f64 {
        let total_secs = self.total_time.as_secs_f64();
        if total_secs == 0.0 {
            0.0
        } else {
            100.0 * self.fourier_time.as_secs_f64() / total_secs
        }
    }

    /// Average time per attempt
    pub fn time_per_attempt(&self) -> Duration {
        if self.attempts == 0 {
            Duration::ZERO
        } else {
            self.total_time / self.attempts as u32
        }
    }
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Run Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time)?;
        writeln!(f, "    Modular exponentiation: {:?}", self.modexp_time)?;
        writeln!(
            f,
            "    Fourier transform: {:?} ({:.1}%)",
            self.fourier_time,
            self.fourier_percent()
        )?;
        writeln!(f, "  Attempts: {}", self.attempts)?;
        writeln!(f, "  Witness draws: {}", self.witness_draws)?;
        writeln!(f, "  Measurements: {}", self.measurements)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourier_percent() {
        let stats = RunStatistics {
            total_time: Duration::from_secs(1),
            fourier_time: Duration::from_millis(250),
            ..Default::default()
        };

        assert!((stats.fourier_percent() - 25.0).abs() < 0.1);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = RunStatistics::new();
        assert_eq!(stats.fourier_percent(), 0.0);
        assert_eq!(stats.time_per_attempt(), Duration::ZERO);
    }

    #[test]
    fn test_time_per_attempt() {
        let stats = RunStatistics {
            total_time: Duration::from_millis(300),
            attempts: 3,
            ..Default::default()
        };

        assert_eq!(stats.time_per_attempt(), Duration::from_millis(100));
    }

    #[test]
    fn test_display() {
        let stats = RunStatistics {
            attempts: 2,
            measurements: 4,
            ..Default::default()
        };

        let output = stats.to_string();
        assert!(output.contains("Run Statistics"));
        assert!(output.contains("Attempts: 2"));
        assert!(output.contains("Measurements: 4"));
    }
}
