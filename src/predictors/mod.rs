//! Concrete predictor implementations.

pub mod linear;

pub use linear::LinearPredictor;
