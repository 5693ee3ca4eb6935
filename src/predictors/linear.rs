//! Linear predictor with JSON persistence.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    data::DataVector,
    ports::Predictor,
};

/// A linear model: `prediction = weights · vector + bias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPredictor {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPredictor {
    /// Create a predictor from coefficients and a bias term.
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        LinearPredictor { weights, bias }
    }

    /// The coefficient vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The bias term.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Raw affine score for a data vector.
    pub fn score(&self, vector: &DataVector) -> f64 {
        vector.dot(&self.weights) + self.bias
    }

    /// Save the predictor to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a predictor from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let predictor = serde_json::from_reader(file)?;
        Ok(predictor)
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, vector: &DataVector) -> f64 {
        self.score(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_affine() {
        let predictor = LinearPredictor::new(vec![1.0, -2.0], 0.5);
        let vector = DataVector::dense(vec![3.0, 1.0]);
        assert!((predictor.predict(&vector) - (3.0 - 2.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn sparse_vectors_score_like_their_dense_forms() {
        let predictor = LinearPredictor::new(vec![0.5, 1.5, 2.5], -1.0);
        let sparse = DataVector::sparse(vec![(0, 2.0), (2, 4.0)]).unwrap();
        let dense = DataVector::dense(sparse.to_dense(3).unwrap());
        assert_eq!(predictor.predict(&sparse), predictor.predict(&dense));
    }
}
