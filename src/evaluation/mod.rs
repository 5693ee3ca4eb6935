//! The evaluation core: streaming evaluation of predictors with composable
//! metric aggregators.

pub mod aggregators;
pub mod evaluator;

pub use aggregators::{AucAggregator, BinaryErrorAggregator, LossAggregator};
pub use evaluator::{Evaluator, EvaluatorBuilder, make_evaluator};
