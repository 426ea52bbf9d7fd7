use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "joback", version, about = "Joback group-contribution property estimation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate properties for a single structure.
    Estimate(EstimateArgs),
    /// Fragment every compound in a database and write a report.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Structure in SMILES notation.
    pub smiles: String,

    /// Temperature (K) for heat capacity and liquid viscosity.
    #[arg(short, long, default_value_t = 298.15)]
    pub temperature: f64,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Report file path.
    #[arg(short, long, default_value = joback::validate::DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Number of batches to load from the embedded corpus.
    #[arg(short, long, default_value_t = 10, conflicts_with_all = ["all", "input"])]
    pub batches: usize,

    /// Load the whole embedded corpus.
    #[arg(long, conflicts_with = "input")]
    pub all: bool,

    /// Validate an external tab-separated compound file instead
    /// (CAS\tSMILES\tname per line).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Suppress the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}
