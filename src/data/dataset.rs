//! An in-memory labeled dataset.

use serde::{Deserialize, Serialize};

use super::example::Example;
use crate::ports::ExampleSource;

/// An ordered, owned collection of examples.
///
/// The dataset is the standard adapter for the
/// [`ExampleSource`](crate::ports::ExampleSource) port: every call to
/// `examples()` is an independent pass in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    examples: Vec<Example>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Create a dataset from a vector of examples.
    pub fn from_examples(examples: Vec<Example>) -> Self {
        Dataset { examples }
    }

    /// Append an example.
    pub fn push(&mut self, example: Example) {
        self.examples.push(example);
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// True if the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// The smallest feature dimension containing every example.
    pub fn dimension(&self) -> usize {
        self.examples
            .iter()
            .map(|example| example.vector().dimension())
            .max()
            .unwrap_or(0)
    }

    /// Sum of example weights.
    pub fn total_weight(&self) -> f64 {
        self.examples.iter().map(Example::weight).sum()
    }

    /// Iterate over the examples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }
}

impl ExampleSource for Dataset {
    fn examples(&self) -> Box<dyn Iterator<Item = &Example> + '_> {
        Box::new(self.examples.iter())
    }
}
