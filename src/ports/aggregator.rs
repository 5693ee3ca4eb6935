//! Aggregator port - abstraction for metric accumulation
//!
//! This port defines the interface for accumulating a single evaluation
//! metric across a stream of (prediction, label, weight) triples, allowing
//! composable metric collection without coupling the evaluation loop to
//! specific metric implementations.

/// Aggregator trait - stateful accumulator of one evaluation metric
///
/// Aggregators can be composed into an ordered set held by an
/// [`Evaluator`](crate::evaluation::Evaluator). Each aggregator sees every
/// example exactly once per evaluation pass and accumulates independently;
/// aggregators never interact with each other.
///
/// # Design Philosophy
///
/// This trait represents a **port** - a boundary between the evaluation
/// loop and concrete metric implementations. The original design used
/// compile-time tuple dispatch to avoid virtual calls; this crate accepts
/// one virtual call per aggregator per example in exchange for a uniform
/// trait-object representation, the same tradeoff the observer pattern
/// makes elsewhere.
///
/// # Contract
///
/// - `update` is called once per example, in dataset order.
/// - `summarize` renders the accumulated state and must not mutate it:
///   calling it twice with no intervening `update` returns the same string.
///
/// # Examples
///
/// ```
/// use verdict::ports::Aggregator;
///
/// struct ExampleCounter {
///     count: usize,
/// }
///
/// impl Aggregator for ExampleCounter {
///     fn update(&mut self, _prediction: f64, _label: f64, _weight: f64) {
///         self.count += 1;
///     }
///
///     fn summarize(&self) -> String {
///         self.count.to_string()
///     }
/// }
/// ```
pub trait Aggregator: Send {
    /// Accumulate one (prediction, label, weight) observation.
    fn update(&mut self, prediction: f64, label: f64, weight: f64);

    /// Render the accumulated state as text.
    ///
    /// Must be side-effect free. Embedded tabs or newlines are not escaped
    /// by the evaluator; implementations should avoid them.
    fn summarize(&self) -> String;
}
