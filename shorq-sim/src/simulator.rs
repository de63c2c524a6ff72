//! Shor's factoring protocol over simulated registers

use rand::rngs::StdRng;
use rand::SeedableRng;
use shorq_core::{
    best_denominator, bit_length, gcd, is_even, is_prime, is_prime_power, mod_pow, numerator_for,
    smallest_power_of_two_at_least_square, ArithmeticError,
};
use shorq_state::{Amplitude, FourierTransform, QuantumRegister, RandomSource, StateError};
use std::time::Instant;

use crate::{
    config::ShorConfig,
    error::{InvalidInputReason, Result, ShorError},
    observer::{NoopObserver, ShorEvent, ShorObserver},
    result::{AttemptFailure, AttemptRecord, FactorOutcome, FactorReport},
    statistics::RunStatistics,
};

/// Why an attempt stopped early
enum Abort {
    /// The attempt failed; the next one may succeed
    Failed(AttemptFailure),
    /// The run cannot continue
    Fatal(ShorError),
}

impl From<AttemptFailure> for Abort {
    fn from(failure: AttemptFailure) -> Self {
        Abort::Failed(failure)
    }
}

impl From<ArithmeticError> for Abort {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::ZeroOperand { .. } => Abort::Failed(AttemptFailure::DomainFault),
            other => Abort::Fatal(other.into()),
        }
    }
}

impl From<StateError> for Abort {
    fn from(err: StateError) -> Self {
        Abort::Fatal(err.into())
    }
}

/// Map a normalization failure on `register` to an attempt failure
fn on_register(register: u8) -> impl Fn(StateError) -> Abort {
    move |err| match err {
        StateError::ZeroNorm { .. } => Abort::Failed(AttemptFailure::ZeroProbability { register }),
        other => Abort::Fatal(other.into()),
    }
}

/// Register sizes and dimension for one target
#[derive(Debug, Clone, Copy)]
struct Layout {
    q: usize,
    register1_qubits: usize,
    register2_qubits: usize,
}

/// Simulator running Shor's algorithm on classical registers
///
/// Each attempt picks a witness `x` coprime to `n`, tabulates `x^a mod n`
/// into a second register, measures it, transforms the collapsed first
/// register and reads a period candidate off the measurement. Registers are
/// built fresh for every attempt.
///
/// # Example
///
/// ```
/// use shorq_sim::{ShorConfig, ShorSimulator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let simulator = ShorSimulator::new(ShorConfig::default().with_max_attempts(10));
/// let mut rng = StdRng::seed_from_u64(3);
///
/// let report = simulator.run(15, &mut rng).unwrap();
/// if let Some((factor, cofactor)) = report.outcome.factors() {
///     assert_eq!(factor * cofactor, 15);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ShorSimulator {
    config: ShorConfig,
    fourier: FourierTransform,
}

impl Default for ShorSimulator {
    fn default() -> Self {
        Self::new(ShorConfig::default())
    }
}

impl ShorSimulator {
    /// Create a new simulator with the given configuration
    ///
    /// The configuration is validated when a run starts.
    pub fn new(config: ShorConfig) -> Self {
        let fourier = FourierTransform::new(config.fourier);
        Self { config, fourier }
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &ShorConfig {
        &self.config
    }

    /// Check that `n` can be factored and return the register dimension `q`
    ///
    /// # Errors
    ///
    /// [`ShorError::InvalidInput`] when `n` is even, 1, prime, a prime power,
    /// or needs registers above the configured size limit.
    pub fn validate(&self, n: u64) -> Result<u64> {
        self.layout(n).map(|layout| layout.q as u64)
    }

    fn layout(&self, n: u64) -> Result<Layout> {
        let reject = |reason| ShorError::invalid_input(n, reason);

        if is_even(n) {
            return Err(reject(InvalidInputReason::Even));
        }
        if n < 3 {
            return Err(reject(InvalidInputReason::TooSmall));
        }
        if is_prime(n) {
            return Err(reject(InvalidInputReason::Prime));
        }
        if is_prime_power(n) {
            return Err(reject(InvalidInputReason::PrimePower));
        }

        let max_qubits = self.config.max_register_qubits;
        let too_large = |qubits| {
            reject(InvalidInputReason::TooLarge {
                qubits,
                max_qubits,
            })
        };

        let q = smallest_power_of_two_at_least_square(n)
            .map_err(|_| too_large(2 * bit_length(n) as usize))?;
        let register1_qubits = (bit_length(q) - 1) as usize;
        if register1_qubits > max_qubits {
            return Err(too_large(register1_qubits));
        }
        let q = usize::try_from(q).map_err(|_| too_large(register1_qubits))?;

        Ok(Layout {
            q,
            register1_qubits,
            register2_qubits: bit_length(n) as usize,
        })
    }

    /// Factor `n`, drawing randomness from `rng`
    pub fn run<R: RandomSource + ?Sized>(&self, n: u64, rng: &mut R) -> Result<FactorReport> {
        self.run_observed(n, rng, &mut NoopObserver)
    }

    /// Generator for this configuration
    ///
    /// `StdRng::seed_from_u64` when a seed is configured, fresh entropy
    /// otherwise.
    pub fn seeded_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Factor `n` with a generator from [`seeded_rng`](Self::seeded_rng)
    pub fn run_seeded(&self, n: u64) -> Result<FactorReport> {
        self.run(n, &mut self.seeded_rng())
    }

    /// Factor `n`, reporting every protocol step to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or `n` is invalid. Running out of
    /// attempts is not an error; it yields [`FactorOutcome::NoFactorFound`].
    #[tracing::instrument(level = "debug", skip(self, rng, observer))]
    pub fn run_observed<R: RandomSource + ?Sized>(
        &self,
        n: u64,
        rng: &mut R,
        observer: &mut dyn ShorObserver,
    ) -> Result<FactorReport> {
        let total_start = Instant::now();

        self.config.validate().map_err(ShorError::InvalidConfig)?;
        let layout = self.layout(n)?;
        observer.on_event(&ShorEvent::Validated { n });
        observer.on_event(&ShorEvent::RegisterSized {
            q: layout.q as u64,
            qubits: layout.register1_qubits,
        });
        tracing::debug!(q = layout.q, qubits = layout.register1_qubits, "registers sized");

        let mut stats = RunStatistics::new();
        let mut attempts = Vec::with_capacity(self.config.max_attempts);
        let mut outcome = None;

        for attempt in 1..=self.config.max_attempts {
            observer.on_event(&ShorEvent::AttemptStarted { attempt });
            stats.attempts += 1;

            let mut record = AttemptRecord::new(attempt);
            let result = self.attempt(n, layout, rng, observer, &mut record, &mut stats);

            match result {
                Ok(factor) => {
                    record.result = Some(Ok(factor));
                    attempts.push(record);
                    outcome = Some(FactorOutcome::Factored {
                        factor,
                        cofactor: n / factor,
                    });
                    break;
                }
                Err(Abort::Failed(failure)) => {
                    tracing::debug!(attempt, %failure, "attempt failed");
                    observer.on_event(&ShorEvent::AttemptFailed { attempt, failure });
                    record.result = Some(Err(failure));
                    attempts.push(record);
                }
                Err(Abort::Fatal(err)) => return Err(err),
            }
        }

        let outcome = outcome.unwrap_or(FactorOutcome::NoFactorFound {
            attempts: attempts.len(),
        });

        match outcome {
            FactorOutcome::Factored { factor, cofactor } => {
                tracing::info!(n, factor, cofactor, attempts = attempts.len(), "factored");
                observer.on_event(&ShorEvent::Factored { factor, cofactor });
            }
            FactorOutcome::NoFactorFound { attempts } => {
                tracing::info!(n, attempts, "no factor found");
                observer.on_event(&ShorEvent::Exhausted { attempts });
            }
        }

        stats.total_time = total_start.elapsed();

        Ok(FactorReport {
            n,
            q: layout.q as u64,
            outcome,
            attempts,
            statistics: self.config.collect_statistics.then_some(stats),
        })
    }

    /// One pass through witness selection, both measurements and the
    /// classical post-processing
    fn attempt<R: RandomSource + ?Sized>(
        &self,
        n: u64,
        layout: Layout,
        rng: &mut R,
        observer: &mut dyn ShorObserver,
        record: &mut AttemptRecord,
        stats: &mut RunStatistics,
    ) -> std::result::Result<u64, Abort> {
        let attempt = record.attempt;
        let q = layout.q;

        let (witness, draws) = select_witness(n, self.config.max_witness_draws, rng)?;
        stats.witness_draws += draws;
        let witness = witness.ok_or(AttemptFailure::WitnessExhausted { draws })?;
        record.witness = Some(witness);
        observer.on_event(&ShorEvent::WitnessSelected {
            attempt,
            witness,
            draws,
        });
        tracing::debug!(attempt, witness, draws, "witness selected");

        let mut register1 = QuantumRegister::new(layout.register1_qubits)?;
        let mut register2 = QuantumRegister::new(layout.register2_qubits)?;
        register1.set_equal_superposition(q - 1)?;
        observer.on_event(&ShorEvent::RegistersBuilt {
            register1_qubits: layout.register1_qubits,
            register2_qubits: layout.register2_qubits,
        });

        // bookkeeping[a] = x^a mod n stands in for the entanglement between
        // the two registers
        let modexp_start = Instant::now();
        let mut bookkeeping = vec![0usize; q];
        let mut tabulated = vec![Amplitude::ZERO; register2.dimension()];
        for (a, slot) in bookkeeping.iter_mut().enumerate() {
            let value = mod_pow(witness, a as u64, n)? as usize;
            *slot = value;
            tabulated[value] = tabulated[value] + Amplitude::ONE;
        }
        stats.modexp_time += modexp_start.elapsed();

        register2.set_state(&tabulated)?;
        register2.normalize().map_err(on_register(2))?;

        stats.measurements += 1;
        let Some(value) = register2.measure_and_collapse(rng) else {
            tracing::warn!(attempt, register = 2, "measurement inconclusive");
            return Err(AttemptFailure::InconclusiveMeasurement { register: 2 }.into());
        };
        record.register2_value = Some(value);
        observer.on_event(&ShorEvent::Register2Measured { attempt, value });
        tracing::debug!(attempt, value, "register 2 measured");

        let collapsed: Vec<Amplitude> = bookkeeping
            .iter()
            .map(|&v| if v == value { Amplitude::ONE } else { Amplitude::ZERO })
            .collect();
        register1.set_state(&collapsed)?;
        register1.normalize().map_err(on_register(1))?;

        let fourier_start = Instant::now();
        self.fourier
            .apply_with_progress(&mut register1, q, &mut |percent: f64| {
                observer.on_event(&ShorEvent::FourierProgress { attempt, percent })
            })
            .map_err(on_register(1))?;
        stats.fourier_time += fourier_start.elapsed();

        stats.measurements += 1;
        let Some(measured) = register1.measure_and_collapse(rng) else {
            tracing::warn!(attempt, register = 1, "measurement inconclusive");
            return Err(AttemptFailure::InconclusiveMeasurement { register: 1 }.into());
        };
        record.measured = Some(measured);
        observer.on_event(&ShorEvent::Register1Measured {
            attempt,
            value: measured,
        });
        tracing::debug!(attempt, measured, "register 1 measured");

        if measured == 0 {
            return Err(AttemptFailure::MeasuredZero.into());
        }

        let (numerator, denominator) = period_candidate(measured as u64, q as u64);
        record.approximation = Some((numerator, denominator));
        observer.on_event(&ShorEvent::PeriodCandidate {
            attempt,
            numerator,
            denominator,
        });
        tracing::debug!(attempt, numerator, denominator, "period candidate");

        if denominator % 2 == 1 {
            return Err(AttemptFailure::OddPeriod {
                period: denominator,
            }
            .into());
        }

        let factor = candidate_factor(n, witness, denominator)?;
        if factor == 0 || factor == 1 || factor == n {
            return Err(AttemptFailure::TrivialFactor { factor }.into());
        }

        Ok(factor)
    }
}

/// Draw a witness `x` in `[1, n)` with `x != 1` and `gcd(n, x) == 1`
///
/// Returns the witness (or `None` after `max_draws` rejected draws) and the
/// number of draws made.
fn select_witness<R: RandomSource + ?Sized>(
    n: u64,
    max_draws: usize,
    rng: &mut R,
) -> std::result::Result<(Option<u64>, usize), ArithmeticError> {
    for draw in 1..=max_draws {
        let x = rng.next_in_range(1..n);
        if x != 1 && gcd(n, x)? == 1 {
            return Ok((Some(x), draw));
        }
    }
    Ok((None, max_draws))
}

/// Rational approximation `p / den` of `measured / q`
///
/// An odd denominator is doubled (with its numerator) when `2·den < q`.
fn period_candidate(measured: u64, q: u64) -> (u64, u64) {
    let c = measured as f64 / q as f64;
    let mut den = best_denominator(c, q);
    let mut p = numerator_for(c, den);

    if den % 2 == 1 && 2 * den < q {
        p *= 2;
        den *= 2;
    }

    (p, den)
}

/// `max(gcd(n, x^(den/2) + 1), gcd(n, x^(den/2) - 1))`, reduced mod `n`
fn candidate_factor(n: u64, witness: u64, den: u64) -> std::result::Result<u64, ArithmeticError> {
    let e = mod_pow(witness, den / 2, n)?;
    let plus = (e + 1) % n;
    let minus = (e + (n - 1)) % n;
    Ok(gcd(n, plus)?.max(gcd(n, minus)?))
}

/// Factor `n` with the default configuration
///
/// # Example
///
/// ```
/// use shorq_sim::{factor, FactorOutcome};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(11);
/// match factor(21, &mut rng).unwrap() {
///     FactorOutcome::Factored { factor, cofactor } => assert_eq!(factor * cofactor, 21),
///     FactorOutcome::NoFactorFound { attempts } => assert_eq!(attempts, 5),
/// }
/// ```
pub fn factor<R: RandomSource + ?Sized>(n: u64, rng: &mut R) -> Result<FactorOutcome> {
    ShorSimulator::default().run(n, rng).map(|report| report.outcome)
}
