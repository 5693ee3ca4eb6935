//! verdict CLI - evaluate predictors against labeled datasets
//!
//! This CLI provides a unified interface for:
//! - Evaluating stored predictors against datasets with composable metrics
//! - Inspecting dataset contents and balance

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(version, about = "Streaming predictor evaluation toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a predictor against a dataset
    Evaluate(verdict::cli::commands::evaluate::EvaluateArgs),

    /// Print summary statistics for a dataset
    Inspect(verdict::cli::commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => verdict::cli::commands::evaluate::execute(args),
        Commands::Inspect(args) => verdict::cli::commands::inspect::execute(args),
    }
}
