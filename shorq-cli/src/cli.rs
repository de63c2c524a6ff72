use clap::Parser;

#[derive(Parser)]
#[command(name = "shorq")]
#[command(author, version, about = "Factor an integer with a simulation of Shor's algorithm")]
pub struct Cli {
    /// Odd composite to factor (not a prime power)
    pub number: u64,

    /// Seed for the random number generator
    #[arg(long, short, env = "SHORQ_SEED")]
    pub seed: Option<u64>,

    /// Attempts before giving up
    #[arg(long, default_value = "5")]
    pub max_attempts: usize,

    /// Witness draws per attempt
    #[arg(long, default_value = "100")]
    pub max_witness_draws: usize,

    /// Largest register to build, in qubits
    #[arg(long, default_value = "24")]
    pub max_qubits: usize,

    /// Number of independent runs
    #[arg(long, short, default_value = "1")]
    pub runs: usize,

    /// Print the reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not narrate the protocol steps
    #[arg(long, short)]
    pub quiet: bool,

    /// Print run statistics
    #[arg(long)]
    pub stats: bool,
}
