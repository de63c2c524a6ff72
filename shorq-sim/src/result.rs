//! Factoring result types

use serde::Serialize;
use std::fmt;

use crate::statistics::RunStatistics;

/// Final outcome of a factoring run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactorOutcome {
    /// A nontrivial split `factor * cofactor == n`
    Factored { factor: u64, cofactor: u64 },

    /// Every attempt failed; a fresh run may still succeed
    NoFactorFound { attempts: usize },
}

impl FactorOutcome {
    /// The factor pair, if one was found
    pub fn factors(&self) -> Option<(u64, u64)> {
        match *self {
            FactorOutcome::Factored { factor, cofactor } => Some((factor, cofactor)),
            FactorOutcome::NoFactorFound { .. } => None,
        }
    }

    /// Check whether the run found a factor
    pub fn is_factored(&self) -> bool {
        matches!(self, FactorOutcome::Factored { .. })
    }
}

impl fmt::Display for FactorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorOutcome::Factored { factor, cofactor } => {
                write!(f, "{} * {}", factor, cofactor)
            }
            FactorOutcome::NoFactorFound { attempts } => {
                write!(f, "no factor found after {} attempts", attempts)
            }
        }
    }
}

/// Why a single attempt produced no factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptFailure {
    /// No usable witness within the draw limit
    WitnessExhausted { draws: usize },

    /// Rounding left a measurement without an outcome
    InconclusiveMeasurement { register: u8 },

    /// A register ended up with no probability mass
    ZeroProbability { register: u8 },

    /// Register one measured 0, which says nothing about the period
    MeasuredZero,

    /// The period candidate was odd and could not be doubled
    OddPeriod { period: u64 },

    /// gcd was asked to reduce modulo zero
    DomainFault,

    /// The gcd produced 0, 1 or n
    TrivialFactor { factor: u64 },
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::WitnessExhausted { draws } => {
                write!(f, "no witness coprime to n in {} draws", draws)
            }
            AttemptFailure::InconclusiveMeasurement { register } => {
                write!(f, "register {} measurement was inconclusive", register)
            }
            AttemptFailure::ZeroProbability { register } => {
                write!(f, "register {} has no probability mass", register)
            }
            AttemptFailure::MeasuredZero => write!(f, "measured 0"),
            AttemptFailure::OddPeriod { period } => write!(f, "odd period {}", period),
            AttemptFailure::DomainFault => write!(f, "tried to calculate n mod 0"),
            AttemptFailure::TrivialFactor { factor } => {
                write!(f, "found trivial factor {}", factor)
            }
        }
    }
}

/// What happened during one attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptRecord {
    /// Attempt number, starting at 1
    pub attempt: usize,

    /// Witness `x` coprime to `n`
    pub witness: Option<u64>,

    /// Value measured in register two (`x^a mod n`)
    pub register2_value: Option<usize>,

    /// Value `m` measured in register one after the Fourier transform
    pub measured: Option<usize>,

    /// Rational approximation `p / den` of `m / q`
    pub approximation: Option<(u64, u64)>,

    /// Factor found, or why none was; `None` until the attempt finishes
    pub result: Option<std::result::Result<u64, AttemptFailure>>,
}

impl AttemptRecord {
    /// Create an empty record for attempt `attempt`
    pub fn new(attempt: usize) -> Self {
        Self {
            attempt,
            witness: None,
            register2_value: None,
            measured: None,
            approximation: None,
            result: None,
        }
    }

    /// Candidate period (the approximation's denominator)
    pub fn period(&self) -> Option<u64> {
        self.approximation.map(|(_, den)| den)
    }

    /// The factor, if the attempt found one
    pub fn factor(&self) -> Option<u64> {
        self.result.and_then(|result| result.ok())
    }

    /// The failure reason, if the attempt failed
    pub fn failure(&self) -> Option<AttemptFailure> {
        self.result.and_then(|result| result.err())
    }

    /// Check whether the attempt has an outcome yet
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

/// Full report of a factoring run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorReport {
    /// The number that was factored
    pub n: u64,

    /// Register dimension `q`, `n² <= q < 2n²`
    pub q: u64,

    /// Final outcome
    pub outcome: FactorOutcome,

    /// One record per attempt, in order
    pub attempts: Vec<AttemptRecord>,

    /// Run statistics (if statistics collection was enabled)
    pub statistics: Option<RunStatistics>,
}

impl FactorReport {
    /// Number of attempts made
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Failure reasons of the failed attempts, in order
    pub fn failures(&self) -> Vec<AttemptFailure> {
        self.attempts.iter().filter_map(AttemptRecord::failure).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let found = FactorOutcome::Factored {
            factor: 3,
            cofactor: 5,
        };
        assert!(found.is_factored());
        assert_eq!(found.factors(), Some((3, 5)));
        assert_eq!(found.to_string(), "3 * 5");

        let none = FactorOutcome::NoFactorFound { attempts: 5 };
        assert!(!none.is_factored());
        assert_eq!(none.factors(), None);
        assert!(none.to_string().contains("5 attempts"));
    }

    #[test]
    fn test_record_defaults() {
        let mut record = AttemptRecord::new(2);
        assert_eq!(record.attempt, 2);
        assert_eq!(record.period(), None);
        assert!(!record.is_finished());
        assert_eq!(record.factor(), None);
        assert_eq!(record.failure(), None);

        record.approximation = Some((1, 4));
        record.result = Some(Ok(5));
        assert!(record.is_finished());
        assert_eq!(record.period(), Some(4));
        assert_eq!(record.factor(), Some(5));
        assert_eq!(record.failure(), None);
    }

    #[test]
    fn test_report_failures() {
        let mut first = AttemptRecord::new(1);
        first.result = Some(Err(AttemptFailure::OddPeriod { period: 3 }));
        let mut second = AttemptRecord::new(2);
        second.result = Some(Ok(7));

        let report = FactorReport {
            n: 21,
            q: 512,
            outcome: FactorOutcome::Factored {
                factor: 7,
                cofactor: 3,
            },
            attempts: vec![first, second],
            statistics: None,
        };

        assert_eq!(report.attempt_count(), 2);
        assert_eq!(report.failures(), vec![AttemptFailure::OddPeriod { period: 3 }]);
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(AttemptFailure::MeasuredZero.to_string(), "measured 0");
        assert!(AttemptFailure::DomainFault.to_string().contains("mod 0"));
        assert!(AttemptFailure::TrivialFactor { factor: 1 }
            .to_string()
            .contains("trivial"));
    }
}
