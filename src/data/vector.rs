//! Dense and sparse feature vectors.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A numeric feature vector associated with one example.
///
/// Dense vectors store every entry; sparse vectors store only nonzero
/// entries as (index, value) pairs with strictly increasing indices.
/// Prediction code should not care which representation it is handed, so
/// both expose the same read-only operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataVector {
    /// Every entry stored explicitly.
    Dense(Vec<f64>),
    /// Only nonzero entries, as parallel index/value arrays.
    Sparse {
        indices: Vec<usize>,
        values: Vec<f64>,
    },
}

impl DataVector {
    /// Create a dense vector from its entries.
    pub fn dense(values: Vec<f64>) -> Self {
        DataVector::Dense(values)
    }

    /// Create a sparse vector from (index, value) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderedSparseIndex`] if indices are not strictly
    /// increasing.
    pub fn sparse(pairs: Vec<(usize, f64)>) -> Result<Self> {
        let mut indices = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (index, value) in pairs {
            if let Some(&previous) = indices.last() {
                if index <= previous {
                    return Err(Error::UnorderedSparseIndex { index, previous });
                }
            }
            indices.push(index);
            values.push(value);
        }
        Ok(DataVector::Sparse { indices, values })
    }

    /// The smallest dimension that contains every stored entry.
    pub fn dimension(&self) -> usize {
        match self {
            DataVector::Dense(values) => values.len(),
            DataVector::Sparse { indices, .. } => indices.last().map_or(0, |last| last + 1),
        }
    }

    /// Entry at `index`, zero if beyond the stored prefix.
    pub fn get(&self, index: usize) -> f64 {
        match self {
            DataVector::Dense(values) => values.get(index).copied().unwrap_or(0.0),
            DataVector::Sparse { indices, values } => indices
                .binary_search(&index)
                .map(|pos| values[pos])
                .unwrap_or(0.0),
        }
    }

    /// Iterate over (index, value) pairs of stored nonzero entries.
    ///
    /// For dense vectors, zero entries are skipped so both representations
    /// yield the same sequence for equal vectors.
    pub fn iter_nonzero(&self) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        match self {
            DataVector::Dense(values) => Box::new(
                values
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|&(_, value)| value != 0.0),
            ),
            DataVector::Sparse { indices, values } => Box::new(
                indices
                    .iter()
                    .copied()
                    .zip(values.iter().copied())
                    .filter(|&(_, value)| value != 0.0),
            ),
        }
    }

    /// Number of stored nonzero entries.
    pub fn nonzero_count(&self) -> usize {
        self.iter_nonzero().count()
    }

    /// Dot product with a dense coefficient slice.
    ///
    /// Entries beyond `coefficients.len()` contribute nothing, matching the
    /// usual convention of padding the shorter operand with zeros.
    pub fn dot(&self, coefficients: &[f64]) -> f64 {
        self.iter_nonzero()
            .filter(|&(index, _)| index < coefficients.len())
            .map(|(index, value)| value * coefficients[index])
            .sum()
    }

    /// Squared Euclidean norm.
    pub fn squared_norm(&self) -> f64 {
        self.iter_nonzero().map(|(_, value)| value * value).sum()
    }

    /// Materialize as a dense vector of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vector does not fit.
    pub fn to_dense(&self, dimension: usize) -> Result<Vec<f64>> {
        if self.dimension() > dimension {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                got: self.dimension(),
            });
        }
        let mut dense = vec![0.0; dimension];
        for (index, value) in self.iter_nonzero() {
            dense[index] = value;
        }
        Ok(dense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_requires_increasing_indices() {
        assert!(DataVector::sparse(vec![(0, 1.0), (3, 2.0)]).is_ok());
        assert!(matches!(
            DataVector::sparse(vec![(2, 1.0), (2, 2.0)]),
            Err(Error::UnorderedSparseIndex {
                index: 2,
                previous: 2
            })
        ));
        assert!(DataVector::sparse(vec![(5, 1.0), (1, 2.0)]).is_err());
    }

    #[test]
    fn dimension_and_get() {
        let dense = DataVector::dense(vec![1.0, 0.0, 3.0]);
        assert_eq!(dense.dimension(), 3);
        assert_eq!(dense.get(2), 3.0);
        assert_eq!(dense.get(10), 0.0);

        let sparse = DataVector::sparse(vec![(1, 2.0), (4, 5.0)]).unwrap();
        assert_eq!(sparse.dimension(), 5);
        assert_eq!(sparse.get(1), 2.0);
        assert_eq!(sparse.get(2), 0.0);
        assert_eq!(sparse.get(4), 5.0);
    }

    #[test]
    fn dense_and_sparse_dot_agree() {
        let dense = DataVector::dense(vec![0.0, 2.0, 0.0, -1.0]);
        let sparse = DataVector::sparse(vec![(1, 2.0), (3, -1.0)]).unwrap();
        let coefficients = [0.5, 1.5, 2.5, 3.5];

        assert_eq!(dense.dot(&coefficients), sparse.dot(&coefficients));
        assert!((dense.dot(&coefficients) - (2.0 * 1.5 - 3.5)).abs() < 1e-12);
    }

    #[test]
    fn dot_ignores_entries_past_coefficients() {
        let sparse = DataVector::sparse(vec![(0, 1.0), (9, 100.0)]).unwrap();
        assert_eq!(sparse.dot(&[2.0]), 2.0);
    }

    #[test]
    fn to_dense_round_trip() {
        let sparse = DataVector::sparse(vec![(1, 2.0), (3, 4.0)]).unwrap();
        assert_eq!(sparse.to_dense(5).unwrap(), vec![0.0, 2.0, 0.0, 4.0, 0.0]);
        assert!(sparse.to_dense(2).is_err());
    }

    #[test]
    fn nonzero_iteration_skips_zeros_in_dense() {
        let dense = DataVector::dense(vec![0.0, 1.0, 0.0, 2.0]);
        let pairs: Vec<_> = dense.iter_nonzero().collect();
        assert_eq!(pairs, vec![(1, 1.0), (3, 2.0)]);
    }
}
