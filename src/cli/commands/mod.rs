//! CLI command implementations.

use std::path::Path;

use anyhow::Result;

use crate::data::Dataset;

pub mod evaluate;
pub mod inspect;

/// Load a dataset in the format named on the command line.
///
/// `csv_weights` is only consulted for the `csv` format.
fn load_dataset(path: &Path, format: &str, csv_weights: bool) -> Result<Dataset> {
    let dataset = match format.to_lowercase().as_str() {
        "sparse" => Dataset::load_sparse(path)?,
        "csv" => Dataset::load_csv(path, csv_weights)?,
        other => {
            return Err(anyhow::anyhow!(
                "Unknown dataset format: '{other}'. Supported: sparse, csv"
            ));
        }
    };
    Ok(dataset)
}
