//! Step-by-step narration of a factoring run
//!
//! A [`ShorObserver`] receives a [`ShorEvent`] at every protocol step. Any
//! `FnMut(&ShorEvent)` closure is an observer. Observers only watch; they
//! never change what a run computes.

use serde::Serialize;

use crate::result::AttemptFailure;

/// A protocol step, reported as it happens
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShorEvent {
    /// `n` passed validation
    Validated { n: u64 },

    /// Register one will hold `q` basis states
    RegisterSized { q: u64, qubits: usize },

    /// A new attempt begins
    AttemptStarted { attempt: usize },

    /// Witness `x` chosen after `draws` draws
    WitnessSelected { attempt: usize, witness: u64, draws: usize },

    /// Both registers built and register one placed in superposition
    RegistersBuilt { register1_qubits: usize, register2_qubits: usize },

    /// Register two measured `value`
    Register2Measured { attempt: usize, value: usize },

    /// Fourier transform progress, in percent
    FourierProgress { attempt: usize, percent: f64 },

    /// Register one measured `value`
    Register1Measured { attempt: usize, value: usize },

    /// Rational approximation `numerator / denominator` of `m / q`
    PeriodCandidate { attempt: usize, numerator: u64, denominator: u64 },

    /// The attempt failed
    AttemptFailed { attempt: usize, failure: AttemptFailure },

    /// A nontrivial factor was found
    Factored { factor: u64, cofactor: u64 },

    /// Every attempt failed
    Exhausted { attempts: usize },
}

/// Receiver of [`ShorEvent`]s
pub trait ShorObserver {
    /// Called once per event, in protocol order
    fn on_event(&mut self, event: &ShorEvent);
}

impl<F> ShorObserver for F
where
    F: FnMut(&ShorEvent),
{
    fn on_event(&mut self, event: &ShorEvent) {
        self(event)
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ShorObserver for NoopObserver {
    fn on_event(&mut self, _event: &ShorEvent) {}
}

/// Observer that records every event
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ShorEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[ShorEvent] {
        &self.events
    }

    /// Failures reported during the run
    pub fn failures(&self) -> Vec<AttemptFailure> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ShorEvent::AttemptFailed { failure, .. } => Some(*failure),
                _ => None,
            })
            .collect()
    }
}

impl ShorObserver for EventLog {
    fn on_event(&mut self, event: &ShorEvent) {
        self.events.push(*event);
    }
}
