//! Predictor port - abstraction over trained models
//!
//! A predictor maps a data vector to a scalar score. The evaluation core
//! only needs this single capability; how the model was trained is not its
//! concern.

use crate::data::DataVector;

/// Predictor trait - maps a data vector to a scalar prediction
///
/// # Design Philosophy
///
/// This trait represents a **port** - a boundary between the evaluation
/// core and concrete model implementations. Linear models, forests, or
/// hand-written scoring rules are **adapters** that implement this port.
///
/// # Examples
///
/// ```
/// use verdict::{data::DataVector, ports::Predictor};
///
/// struct ConstantPredictor(f64);
///
/// impl Predictor for ConstantPredictor {
///     fn predict(&self, _vector: &DataVector) -> f64 {
///         self.0
///     }
/// }
///
/// let model = ConstantPredictor(0.5);
/// assert_eq!(model.predict(&DataVector::dense(vec![1.0, 2.0])), 0.5);
/// ```
pub trait Predictor {
    /// Compute a scalar prediction for the given data vector.
    fn predict(&self, vector: &DataVector) -> f64;
}

/// Closures are predictors. This keeps tests and one-off scoring rules
/// lightweight.
///
/// ```
/// use verdict::{data::DataVector, ports::Predictor};
///
/// let threshold = |v: &DataVector| if v.get(0) > 0.0 { 1.0 } else { -1.0 };
/// assert_eq!(threshold.predict(&DataVector::dense(vec![2.0])), 1.0);
/// ```
impl<F> Predictor for F
where
    F: Fn(&DataVector) -> f64,
{
    fn predict(&self, vector: &DataVector) -> f64 {
        self(vector)
    }
}
