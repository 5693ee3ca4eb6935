//! Streaming evaluation of scalar predictors against labeled datasets
//!
//! This crate provides:
//! - An evaluator that streams examples past a predictor and fans each
//!   (prediction, label, weight) triple out to a fixed set of metric
//!   aggregators
//! - Trait boundaries (ports) for predictors, aggregators, and example
//!   sources
//! - Dense and sparse data vectors with elementwise algebra
//! - Dataset loading from sparse text and CSV, plus matrix views
//! - A linear predictor with JSON persistence

pub mod cli;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod ports;
pub mod predictors;

pub use data::{DataVector, Dataset, Example};
pub use error::{Error, Result};
pub use evaluation::{
    AucAggregator, BinaryErrorAggregator, Evaluator, EvaluatorBuilder, LossAggregator,
    make_evaluator,
};
pub use ports::{Aggregator, ExampleSource, Predictor};
pub use predictors::LinearPredictor;
