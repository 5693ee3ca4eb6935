//! Ports (trait boundaries) for external collaborators.
//!
//! This module defines the interfaces between the evaluation core and the
//! things it consumes but does not own: predictors, metric aggregators, and
//! example sources. Following hexagonal architecture, these traits are owned
//! by the core and implemented by adapters elsewhere in (or outside of) the
//! crate.

pub mod aggregator;
pub mod predictor;
pub mod source;

pub use aggregator::Aggregator;
pub use predictor::Predictor;
pub use source::ExampleSource;
