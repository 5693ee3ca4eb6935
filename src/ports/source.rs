//! Example source port - abstraction over dataset iteration
//!
//! An example source hands out a fresh, finite, single-pass iterator over
//! its examples each time one is requested. The evaluation core holds a
//! source handle and re-acquires an iterator per evaluation pass, so a
//! source must be able to serve multiple passes over its lifetime.

use crate::data::Example;

/// Port for acquiring passes over a labeled dataset.
///
/// # Examples
///
/// ```
/// use verdict::{
///     data::{DataVector, Dataset, Example},
///     ports::ExampleSource,
/// };
///
/// let dataset = Dataset::from_examples(vec![Example::new(
///     DataVector::dense(vec![1.0]),
///     1.0,
///     1.0,
/// )]);
///
/// // Each call to examples() is an independent pass.
/// assert_eq!(dataset.examples().count(), 1);
/// assert_eq!(dataset.examples().count(), 1);
/// ```
pub trait ExampleSource {
    /// Acquire a fresh iterator over the examples, in dataset order.
    fn examples(&self) -> Box<dyn Iterator<Item = &Example> + '_>;
}
