//! The evaluator: streams examples past a predictor and fans the resulting
//! (prediction, label, weight) triples out to a fixed set of aggregators.

use std::{io::Write, sync::Arc};

use crate::{
    Error, Result,
    ports::{Aggregator, ExampleSource, Predictor},
};

/// Drives evaluation of a predictor against a labeled dataset.
///
/// An evaluator owns an ordered, non-empty set of aggregators and holds a
/// handle to an example source. Each [`evaluate`](Evaluator::evaluate) call
/// acquires a fresh pass from the source and feeds every example to every
/// aggregator, in the set's construction order. Aggregator state accumulates
/// across calls; nothing is ever reset implicitly.
///
/// Evaluation is single-threaded and synchronous. Concurrent `evaluate`
/// calls against one evaluator are not supported; the `&mut self` receiver
/// makes the exclusive-mutation requirement explicit.
///
/// # Examples
///
/// ```
/// use verdict::{
///     data::{DataVector, Dataset, Example},
///     evaluation::{BinaryErrorAggregator, EvaluatorBuilder},
/// };
/// use std::sync::Arc;
///
/// let dataset = Dataset::from_examples(vec![
///     Example::new(DataVector::dense(vec![1.0]), 1.0, 1.0),
///     Example::new(DataVector::dense(vec![-1.0]), -1.0, 2.0),
/// ]);
///
/// let mut evaluator = EvaluatorBuilder::new(Arc::new(dataset))
///     .with_aggregator(Box::new(BinaryErrorAggregator::new()))
///     .build()?;
///
/// evaluator.evaluate(&|v: &DataVector| v.get(0));
/// assert_eq!(evaluator.summary_line(), "0.000\n");
/// # Ok::<(), verdict::Error>(())
/// ```
pub struct Evaluator {
    source: Arc<dyn ExampleSource>,
    aggregators: Vec<Box<dyn Aggregator>>,
}

impl Evaluator {
    /// Create an evaluator over a source with an ordered aggregator set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAggregatorSet`] if no aggregators are given; an
    /// evaluator that could never report anything is rejected outright.
    pub fn new(
        source: Arc<dyn ExampleSource>,
        aggregators: Vec<Box<dyn Aggregator>>,
    ) -> Result<Self> {
        if aggregators.is_empty() {
            return Err(Error::EmptyAggregatorSet);
        }
        Ok(Evaluator {
            source,
            aggregators,
        })
    }

    /// Run one evaluation pass with the given predictor.
    ///
    /// Acquires a fresh iterator from the source and, for each example in
    /// order, computes the prediction and updates every aggregator with
    /// `(prediction, label, weight)`. An empty dataset yields zero updates
    /// and is not an error.
    pub fn evaluate<P: Predictor + ?Sized>(&mut self, predictor: &P) {
        for example in self.source.examples() {
            let prediction = predictor.predict(example.vector());
            let label = example.label();
            let weight = example.weight();
            for aggregator in &mut self.aggregators {
                aggregator.update(prediction, label, weight);
            }
        }
    }

    /// Current summaries of all aggregators, in construction order.
    pub fn summaries(&self) -> Vec<String> {
        self.aggregators
            .iter()
            .map(|aggregator| aggregator.summarize())
            .collect()
    }

    /// The report line: summaries joined by single tabs, terminated by one
    /// newline. For `n` aggregators the line contains exactly `n - 1` tabs.
    pub fn summary_line(&self) -> String {
        let mut line = self.summaries().join("\t");
        line.push('\n');
        line
    }

    /// Write the report line to a sink. Does not mutate aggregator state.
    pub fn print<W: Write>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(self.summary_line().as_bytes())
            .map_err(|source| Error::Io {
                operation: "write evaluation summary".to_string(),
                source,
            })
    }

    /// Number of aggregators in the set.
    pub fn num_aggregators(&self) -> usize {
        self.aggregators.len()
    }
}

/// Construct an evaluator from a source and an aggregator list.
///
/// Thin factory over [`Evaluator::new`]; validation is limited to the
/// non-empty-set invariant.
pub fn make_evaluator(
    source: Arc<dyn ExampleSource>,
    aggregators: Vec<Box<dyn Aggregator>>,
) -> Result<Evaluator> {
    Evaluator::new(source, aggregators)
}

/// Builder for assembling an evaluator one aggregator at a time.
pub struct EvaluatorBuilder {
    source: Arc<dyn ExampleSource>,
    aggregators: Vec<Box<dyn Aggregator>>,
}

impl EvaluatorBuilder {
    /// Start a builder over the given example source.
    pub fn new(source: Arc<dyn ExampleSource>) -> Self {
        EvaluatorBuilder {
            source,
            aggregators: Vec::new(),
        }
    }

    /// Append an aggregator; reporting order follows insertion order.
    pub fn with_aggregator(mut self, aggregator: Box<dyn Aggregator>) -> Self {
        self.aggregators.push(aggregator);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAggregatorSet`] if no aggregator was added.
    pub fn build(self) -> Result<Evaluator> {
        Evaluator::new(self.source, self.aggregators)
    }
}
