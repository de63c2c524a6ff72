use shorq_sim::{ShorEvent, ShorObserver};

/// Prints each protocol step to stderr
#[derive(Default)]
pub struct Narrator {
    last_percent: f64,
}

impl Narrator {
    pub fn new() -> Self {
        Self { last_percent: 0.0 }
    }
}

impl ShorObserver for Narrator {
    fn on_event(&mut self, event: &ShorEvent) {
        match *event {
            ShorEvent::Validated { n } => eprintln!("Factoring {}", n),
            ShorEvent::RegisterSized { q, qubits } => {
                eprintln!("Found q = {} ({} qubits), n^2 <= q < 2n^2", q, qubits)
            }
            ShorEvent::AttemptStarted { attempt } => {
                self.last_percent = 0.0;
                eprintln!("Attempt {}", attempt);
            }
            ShorEvent::WitnessSelected { witness, draws, .. } => {
                eprintln!("  Chose witness x = {} after {} draws", witness, draws)
            }
            ShorEvent::RegistersBuilt {
                register1_qubits,
                register2_qubits,
            } => eprintln!(
                "  Built registers of {} and {} qubits",
                register1_qubits, register2_qubits
            ),
            ShorEvent::Register2Measured { value, .. } => {
                eprintln!("  Register 2 measured {}", value)
            }
            ShorEvent::FourierProgress { percent, .. } => {
                // Keep the narration to roughly one line per quarter
                if percent - self.last_percent >= 25.0 {
                    self.last_percent = percent;
                    eprintln!("  Fourier transform {:.0}% done", percent);
                }
            }
            ShorEvent::Register1Measured { value, .. } => {
                eprintln!("  Register 1 measured {}", value)
            }
            ShorEvent::PeriodCandidate {
                numerator,
                denominator,
                ..
            } => eprintln!("  Approximated m/q as {}/{}", numerator, denominator),
            ShorEvent::AttemptFailed { failure, .. } => eprintln!("  Failed: {}", failure),
            ShorEvent::Factored { .. } | ShorEvent::Exhausted { .. } => {}
        }
    }
}
