//! A single labeled, weighted example.

use serde::{Deserialize, Serialize};

use super::vector::DataVector;
use crate::{Error, Result};

/// One supervised example: a feature vector with a label and a weight.
///
/// Examples are immutable once constructed; the evaluator only ever reads
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    vector: DataVector,
    label: f64,
    weight: f64,
}

impl Example {
    /// Create an example. Weight conventions (non-negativity) are enforced
    /// by [`Example::checked`]; this constructor trusts its caller.
    pub fn new(vector: DataVector, label: f64, weight: f64) -> Self {
        Example {
            vector,
            label,
            weight,
        }
    }

    /// Create an example, validating the weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the weight is negative or not
    /// finite.
    pub fn checked(vector: DataVector, label: f64, weight: f64) -> Result<Self> {
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(Error::InvalidWeight { value: weight });
        }
        Ok(Example::new(vector, label, weight))
    }

    /// The feature vector.
    pub fn vector(&self) -> &DataVector {
        &self.vector
    }

    /// The supervised label.
    pub fn label(&self) -> f64 {
        self.label
    }

    /// The example weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_bad_weights() {
        let vector = DataVector::dense(vec![1.0]);
        assert!(Example::checked(vector.clone(), 1.0, 0.0).is_ok());
        assert!(Example::checked(vector.clone(), 1.0, -1.0).is_err());
        assert!(Example::checked(vector.clone(), 1.0, f64::NAN).is_err());
        assert!(Example::checked(vector, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn accessors() {
        let example = Example::new(DataVector::dense(vec![1.0, 2.0]), -1.0, 2.5);
        assert_eq!(example.vector().dimension(), 2);
        assert_eq!(example.label(), -1.0);
        assert_eq!(example.weight(), 2.5);
    }
}
