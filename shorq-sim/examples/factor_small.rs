//! Example factoring a few small composites
//!
//! Runs the simulator on each target with a fixed seed and prints the
//! per-attempt records.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shorq_sim::{FactorOutcome, ShorConfig, ShorSimulator};

fn main() {
    println!("=== Shor's Algorithm on Small Composites ===\n");

    let simulator = ShorSimulator::new(ShorConfig::fast().with_statistics(true));
    let mut rng = StdRng::seed_from_u64(2024);

    for n in [15u64, 21, 33, 35] {
        println!("n = {}", n);
        println!("------");

        let report = match simulator.run(n, &mut rng) {
            Ok(report) => report,
            Err(err) => {
                println!("  {}\n", err);
                continue;
            }
        };

        println!("q = {}", report.q);
        for record in &report.attempts {
            let witness = record
                .witness
                .map_or_else(|| "-".to_string(), |x| x.to_string());
            match record.result {
                Some(Ok(factor)) => println!(
                    "  attempt {}: x = {}, m = {:?}, p/den = {:?} -> factor {}",
                    record.attempt, witness, record.measured, record.approximation, factor
                ),
                Some(Err(failure)) => println!(
                    "  attempt {}: x = {}, m = {:?} -> {}",
                    record.attempt, witness, record.measured, failure
                ),
                None => println!("  attempt {}: unfinished", record.attempt),
            }
        }

        match report.outcome {
            FactorOutcome::Factored { factor, cofactor } => {
                println!("Result: {} = {} * {}", n, factor, cofactor)
            }
            FactorOutcome::NoFactorFound { attempts } => {
                println!("Result: nothing after {} attempts", attempts)
            }
        }

        if let Some(stats) = &report.statistics {
            print!("{}", stats);
        }
        println!();
    }

    // Rejected inputs
    for n in [14u64, 17, 27] {
        if let Err(err) = simulator.validate(n) {
            println!("{}", err);
        }
    }
}
