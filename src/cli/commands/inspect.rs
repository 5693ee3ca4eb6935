//! Inspect command - summarize a dataset's contents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Print summary statistics for a dataset")]
pub struct InspectArgs {
    /// Path to the dataset file
    pub dataset: PathBuf,

    /// Dataset format (`sparse` or `csv`)
    #[arg(long, short = 'f', default_value = "sparse")]
    pub format: String,

    /// Treat the second CSV column as an example weight
    #[arg(long)]
    pub csv_weights: bool,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let dataset = super::load_dataset(&args.dataset, &args.format, args.csv_weights)?;

    let positives = dataset.iter().filter(|e| e.label() > 0.0).count();
    let negatives = dataset.len() - positives;
    let nonzero: usize = dataset.iter().map(|e| e.vector().nonzero_count()).sum();

    println!("Dataset: {}", args.dataset.display());
    println!("Examples: {}", dataset.len());
    println!("Dimension: {}", dataset.dimension());
    println!("Total weight: {}", dataset.total_weight());
    println!("Positive labels: {positives}");
    println!("Non-positive labels: {negatives}");
    if !dataset.is_empty() {
        println!(
            "Mean nonzero entries per example: {:.2}",
            nonzero as f64 / dataset.len() as f64
        );
    }

    Ok(())
}
