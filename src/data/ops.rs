//! Elementwise algebra on data vectors.
//!
//! Two iteration policies apply, following the source contracts: operations
//! that map zero to zero (scaling, square, sqrt, abs) touch only the stored
//! nonzero entries, while the zero indicator must visit every entry and
//! therefore materializes a dense result.

use std::ops::Mul;

use super::vector::DataVector;

impl DataVector {
    /// Scale every entry by `scalar`, preserving representation.
    pub fn scale(&self, scalar: f64) -> DataVector {
        self.map_nonzero(|value| scalar * value)
    }

    /// Elementwise square.
    pub fn square(&self) -> DataVector {
        self.map_nonzero(|value| value * value)
    }

    /// Elementwise square root.
    pub fn sqrt(&self) -> DataVector {
        self.map_nonzero(f64::sqrt)
    }

    /// Elementwise absolute value.
    pub fn abs(&self) -> DataVector {
        self.map_nonzero(f64::abs)
    }

    /// Elementwise zero indicator: 1.0 where the entry is zero, else 0.0.
    ///
    /// Visits all `dimension()` entries, so the result is always dense.
    pub fn zero_indicator(&self) -> DataVector {
        let dense: Vec<f64> = (0..self.dimension())
            .map(|index| if self.get(index) == 0.0 { 1.0 } else { 0.0 })
            .collect();
        DataVector::Dense(dense)
    }

    fn map_nonzero<F>(&self, transform: F) -> DataVector
    where
        F: Fn(f64) -> f64,
    {
        match self {
            DataVector::Dense(values) => DataVector::Dense(
                values
                    .iter()
                    .map(|&value| if value == 0.0 { 0.0 } else { transform(value) })
                    .collect(),
            ),
            DataVector::Sparse { indices, values } => DataVector::Sparse {
                indices: indices.clone(),
                values: values.iter().map(|&value| transform(value)).collect(),
            },
        }
    }
}

impl Mul<f64> for &DataVector {
    type Output = DataVector;

    fn mul(self, scalar: f64) -> DataVector {
        self.scale(scalar)
    }
}

impl Mul<&DataVector> for f64 {
    type Output = DataVector;

    fn mul(self, vector: &DataVector) -> DataVector {
        vector.scale(self)
    }
}

/// Dot product of a dense coefficient slice with a data vector.
pub fn dot(coefficients: &[f64], vector: &DataVector) -> f64 {
    vector.dot(coefficients)
}
