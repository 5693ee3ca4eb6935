//! Matrix views of datasets and small matrix utilities.

use ndarray::{Array1, Array2};

use super::dataset::Dataset;
use crate::{Error, Result};

/// Convert a dataset to a dense feature matrix (one row per example) and a
/// label vector.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for an empty dataset (the feature
/// dimension would be unknowable).
pub fn dataset_to_matrix(dataset: &Dataset) -> Result<(Array2<f64>, Array1<f64>)> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let dimension = dataset.dimension();
    let mut features = Array2::zeros((dataset.len(), dimension));
    let mut labels = Array1::zeros(dataset.len());

    for (row, example) in dataset.iter().enumerate() {
        for (column, value) in example.vector().iter_nonzero() {
            features[[row, column]] = value;
        }
        labels[row] = example.label();
    }
    Ok((features, labels))
}

/// Elementwise exponential.
pub fn matrix_exp(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.mapv(f64::exp)
}

/// Frobenius norm.
pub fn matrix_norm(matrix: &Array2<f64>) -> f64 {
    matrix.iter().map(|value| value * value).sum::<f64>().sqrt()
}

/// Largest absolute entry, 0.0 for an empty matrix.
pub fn max_absolute_element(matrix: &Array2<f64>) -> f64 {
    matrix.iter().fold(0.0, |max, value| max.max(value.abs()))
}

/// Hard thresholding: keep the `sparsity` fraction of entries with the
/// largest absolute value and zero out the rest.
///
/// # Errors
///
/// Returns [`Error::InvalidSparsity`] unless `sparsity` is within [0, 1].
pub fn hard_threshold(matrix: &mut Array2<f64>, sparsity: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&sparsity) || !sparsity.is_finite() {
        return Err(Error::InvalidSparsity { value: sparsity });
    }

    let total = matrix.len();
    let keep = (sparsity * total as f64).ceil() as usize;
    if keep >= total {
        return Ok(());
    }
    if keep == 0 {
        matrix.fill(0.0);
        return Ok(());
    }

    let mut magnitudes: Vec<f64> = matrix.iter().map(|value| value.abs()).collect();
    magnitudes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let cutoff = magnitudes[keep - 1];

    // Entries strictly below the cutoff are dropped; ties at the cutoff are
    // kept, so slightly more than `keep` entries may survive.
    matrix.mapv_inplace(|value| if value.abs() < cutoff { 0.0 } else { value });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataVector, Example};
    use ndarray::array;

    #[test]
    fn dataset_to_matrix_lays_out_rows() {
        let dataset = Dataset::from_examples(vec![
            Example::new(DataVector::sparse(vec![(1, 2.0)]).unwrap(), 1.0, 1.0),
            Example::new(DataVector::dense(vec![3.0, 0.0]), -1.0, 1.0),
        ]);
        let (features, labels) = dataset_to_matrix(&dataset).unwrap();
        assert_eq!(features, array![[0.0, 2.0], [3.0, 0.0]]);
        assert_eq!(labels, array![1.0, -1.0]);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(
            dataset_to_matrix(&Dataset::new()),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn norms_and_extremes() {
        let matrix = array![[3.0, 0.0], [0.0, -4.0]];
        assert!((matrix_norm(&matrix) - 5.0).abs() < 1e-12);
        assert_eq!(max_absolute_element(&matrix), 4.0);
    }

    #[test]
    fn exp_is_elementwise() {
        let matrix = array![[0.0, 1.0]];
        let result = matrix_exp(&matrix);
        assert!((result[[0, 0]] - 1.0).abs() < 1e-12);
        assert!((result[[0, 1]] - std::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn hard_threshold_keeps_largest_entries() {
        let mut matrix = array![[1.0, -5.0], [0.5, 3.0]];
        hard_threshold(&mut matrix, 0.5).unwrap();
        assert_eq!(matrix, array![[0.0, -5.0], [0.0, 3.0]]);
    }

    #[test]
    fn hard_threshold_extremes() {
        let mut matrix = array![[1.0, 2.0]];
        hard_threshold(&mut matrix, 1.0).unwrap();
        assert_eq!(matrix, array![[1.0, 2.0]]);

        hard_threshold(&mut matrix, 0.0).unwrap();
        assert_eq!(matrix, array![[0.0, 0.0]]);

        assert!(hard_threshold(&mut matrix, 1.5).is_err());
        assert!(hard_threshold(&mut matrix, f64::NAN).is_err());
    }
}
