//! Evaluate command - score a predictor against a labeled dataset

use std::{io::Write, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    evaluation::{AucAggregator, BinaryErrorAggregator, EvaluatorBuilder, LossAggregator},
    ports::Aggregator,
    predictors::LinearPredictor,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a predictor against a dataset")]
pub struct EvaluateArgs {
    /// Path to the dataset file
    pub dataset: PathBuf,

    /// Path to the predictor file (JSON linear model)
    pub model: PathBuf,

    /// Dataset format (`sparse` or `csv`)
    #[arg(long, short = 'f', default_value = "sparse")]
    pub format: String,

    /// Treat the second CSV column as an example weight
    #[arg(long)]
    pub csv_weights: bool,

    /// Metrics to report, in output order
    #[arg(long, short = 'm', value_delimiter = ',', default_value = "binary-error")]
    pub metrics: Vec<String>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let dataset = super::load_dataset(&args.dataset, &args.format, args.csv_weights)?;
    let predictor = LinearPredictor::load(&args.model)?;

    let mut builder = EvaluatorBuilder::new(Arc::new(dataset));
    for name in &args.metrics {
        builder = builder.with_aggregator(make_aggregator(name)?);
    }
    let mut evaluator = builder.build()?;

    evaluator.evaluate(&predictor);

    let mut stdout = std::io::stdout().lock();
    evaluator.print(&mut stdout)?;
    stdout.flush()?;

    if let Some(export_path) = &args.export {
        export_results(&args, evaluator.summaries(), export_path)?;
        eprintln!("Results exported to: {}", export_path.display());
    }

    Ok(())
}

fn make_aggregator(name: &str) -> Result<Box<dyn Aggregator>> {
    let aggregator: Box<dyn Aggregator> = match name {
        "binary-error" => Box::new(BinaryErrorAggregator::new()),
        "squared-loss" => Box::new(LossAggregator::new(|prediction: f64, label: f64| {
            let delta = prediction - label;
            delta * delta
        })),
        "absolute-loss" => Box::new(LossAggregator::new(|prediction: f64, label: f64| {
            (prediction - label).abs()
        })),
        "auc" => Box::new(AucAggregator::new()),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown metric: '{other}'. Supported: binary-error, squared-loss, absolute-loss, auc"
            ));
        }
    };
    Ok(aggregator)
}

/// Export evaluation results to JSON
fn export_results(args: &EvaluateArgs, summaries: Vec<String>, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct EvaluationExport {
        dataset: String,
        model: String,
        metrics: Vec<MetricEntry>,
    }

    #[derive(Serialize)]
    struct MetricEntry {
        name: String,
        summary: String,
    }

    let export = EvaluationExport {
        dataset: args.dataset.display().to_string(),
        model: args.model.display().to_string(),
        metrics: args
            .metrics
            .iter()
            .cloned()
            .zip(summaries)
            .map(|(name, summary)| MetricEntry { name, summary })
            .collect(),
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
