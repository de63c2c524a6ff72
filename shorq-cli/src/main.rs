use anyhow::{Context, Result};
use clap::Parser;
use shorq_sim::{FactorOutcome, FactorReport, NoopObserver, ShorConfig, ShorObserver, ShorSimulator};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod narrate;

use cli::Cli;
use narrate::Narrator;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut config = ShorConfig::new()
        .with_max_attempts(cli.max_attempts)
        .with_max_witness_draws(cli.max_witness_draws)
        .with_max_register_qubits(cli.max_qubits)
        .with_statistics(cli.stats);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid options")?;

    let simulator = ShorSimulator::new(config);
    let q = simulator
        .validate(cli.number)
        .with_context(|| format!("cannot run on {}", cli.number))?;
    tracing::debug!(n = cli.number, q, "input accepted");

    // One generator for all runs, so `--runs` with a seed gives a
    // reproducible sequence of different runs
    let mut rng = simulator.seeded_rng();

    let mut narrator = Narrator::new();
    let mut noop = NoopObserver;
    let observer: &mut dyn ShorObserver = if cli.quiet || cli.json {
        &mut noop
    } else {
        &mut narrator
    };

    let mut reports = Vec::with_capacity(cli.runs);
    for run in 1..=cli.runs.max(1) {
        let report = simulator
            .run_observed(cli.number, &mut rng, observer)
            .with_context(|| format!("run {} failed", run))?;
        if !cli.json {
            print_report(&report, cli.stats);
        }
        reports.push(report);
    }

    if cli.json {
        let output = if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])?
        } else {
            serde_json::to_string_pretty(&reports)?
        };
        println!("{}", output);
    } else if reports.len() > 1 {
        let factored = reports.iter().filter(|r| r.outcome.is_factored()).count();
        println!("{} of {} runs found a factor", factored, reports.len());
    }

    Ok(())
}

fn print_report(report: &FactorReport, stats: bool) {
    match report.outcome {
        FactorOutcome::Factored { factor, cofactor } => {
            println!("{} = {} * {}", report.n, factor, cofactor);
        }
        FactorOutcome::NoFactorFound { attempts } => {
            println!(
                "No factor of {} found after {} attempts; try again",
                report.n, attempts
            );
        }
    }

    if stats {
        if let Some(statistics) = &report.statistics {
            print!("{}", statistics);
        }
    }
}
