//! Concrete metric aggregators.
//!
//! Each aggregator accumulates one metric over a stream of
//! (prediction, label, weight) triples. They are independent: composing them
//! in an [`Evaluator`](super::Evaluator) only fixes their reporting order.

use crate::ports::Aggregator;

/// Weighted binary classification error.
///
/// An example counts as an error when the prediction does not match the
/// label's sign, i.e. when `prediction * label <= 0`. A prediction of
/// exactly zero is always an error. The summary is the weighted error rate.
#[derive(Debug, Clone, Default)]
pub struct BinaryErrorAggregator {
    total_weight: f64,
    error_weight: f64,
}

impl BinaryErrorAggregator {
    /// Create a fresh aggregator.
    pub fn new() -> Self {
        BinaryErrorAggregator::default()
    }

    /// Accumulated weight of misclassified examples.
    pub fn error_weight(&self) -> f64 {
        self.error_weight
    }

    /// Accumulated weight of all examples.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Weighted error rate, 0.0 before any update.
    pub fn error_rate(&self) -> f64 {
        if self.total_weight == 0.0 {
            0.0
        } else {
            self.error_weight / self.total_weight
        }
    }
}

impl Aggregator for BinaryErrorAggregator {
    fn update(&mut self, prediction: f64, label: f64, weight: f64) {
        self.total_weight += weight;
        if prediction * label <= 0.0 {
            self.error_weight += weight;
        }
    }

    fn summarize(&self) -> String {
        format!("{:.3}", self.error_rate())
    }
}

/// Weighted mean of an externally supplied loss function.
///
/// The loss itself is a closure `(prediction, label) -> f64`; this
/// aggregator only owns the accumulation, not the loss math.
///
/// # Examples
///
/// ```
/// use verdict::{evaluation::LossAggregator, ports::Aggregator};
///
/// let mut squared = LossAggregator::new(|p: f64, l: f64| (p - l) * (p - l));
/// squared.update(0.5, 1.0, 2.0);
/// assert_eq!(squared.mean_loss(), 0.25);
/// ```
pub struct LossAggregator<L> {
    loss: L,
    weighted_loss: f64,
    total_weight: f64,
}

impl<L> LossAggregator<L>
where
    L: Fn(f64, f64) -> f64,
{
    /// Create an aggregator for the given loss function.
    pub fn new(loss: L) -> Self {
        LossAggregator {
            loss,
            weighted_loss: 0.0,
            total_weight: 0.0,
        }
    }

    /// Weighted mean loss, 0.0 before any update.
    pub fn mean_loss(&self) -> f64 {
        if self.total_weight == 0.0 {
            0.0
        } else {
            self.weighted_loss / self.total_weight
        }
    }
}

impl<L> Aggregator for LossAggregator<L>
where
    L: Fn(f64, f64) -> f64 + Send,
{
    fn update(&mut self, prediction: f64, label: f64, weight: f64) {
        self.weighted_loss += weight * (self.loss)(prediction, label);
        self.total_weight += weight;
    }

    fn summarize(&self) -> String {
        format!("{:.6}", self.mean_loss())
    }
}

/// Weighted area under the ROC curve.
///
/// Records every (prediction, label, weight) triple and computes the AUC on
/// demand. Labels `> 0` are positives. Ties in prediction contribute half
/// credit (the Mann-Whitney convention). Degenerate streams with no
/// positives or no negatives report 0.5.
#[derive(Debug, Clone, Default)]
pub struct AucAggregator {
    records: Vec<(f64, f64, f64)>,
}

impl AucAggregator {
    /// Create a fresh aggregator.
    pub fn new() -> Self {
        AucAggregator::default()
    }

    /// Number of recorded examples.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True before the first update.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compute the weighted AUC over everything recorded so far.
    ///
    /// Sorts a local copy of the records; the aggregator itself stays
    /// untouched so summaries remain repeatable.
    pub fn auc(&self) -> f64 {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let total_positive: f64 = sorted
            .iter()
            .filter(|(_, label, _)| *label > 0.0)
            .map(|(_, _, weight)| weight)
            .sum();
        let total_negative: f64 = sorted
            .iter()
            .filter(|(_, label, _)| *label <= 0.0)
            .map(|(_, _, weight)| weight)
            .sum();
        if total_positive == 0.0 || total_negative == 0.0 {
            return 0.5;
        }

        // Sweep in ascending prediction order, grouping ties. Each positive
        // is credited with the negative weight strictly below it plus half
        // the tied negative weight. The group head is consumed before the
        // tie scan so every outer iteration advances even when the
        // prediction is NaN and compares unequal to itself.
        let mut auc_sum = 0.0;
        let mut negatives_below = 0.0;
        let mut index = 0;
        while index < sorted.len() {
            let (prediction, label, weight) = sorted[index];
            index += 1;
            let mut tied_positive = 0.0;
            let mut tied_negative = 0.0;
            if label > 0.0 {
                tied_positive += weight;
            } else {
                tied_negative += weight;
            }
            while index < sorted.len() && sorted[index].0 == prediction {
                let (_, label, weight) = sorted[index];
                if label > 0.0 {
                    tied_positive += weight;
                } else {
                    tied_negative += weight;
                }
                index += 1;
            }
            auc_sum += tied_positive * (negatives_below + 0.5 * tied_negative);
            negatives_below += tied_negative;
        }

        auc_sum / (total_positive * total_negative)
    }
}

impl Aggregator for AucAggregator {
    fn update(&mut self, prediction: f64, label: f64, weight: f64) {
        self.records.push((prediction, label, weight));
    }

    fn summarize(&self) -> String {
        format!("{:.4}", self.auc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_error_counts_weighted_sign_mismatches() {
        let mut aggregator = BinaryErrorAggregator::new();
        aggregator.update(0.5, 1.0, 1.0);
        aggregator.update(-0.3, -1.0, 2.0);
        assert_eq!(aggregator.error_weight(), 0.0);
        assert_eq!(aggregator.summarize(), "0.000");

        aggregator.update(-0.1, 1.0, 3.0);
        assert_eq!(aggregator.error_weight(), 3.0);
        assert_eq!(aggregator.total_weight(), 6.0);
        assert_eq!(aggregator.summarize(), "0.500");
    }

    #[test]
    fn zero_prediction_is_an_error() {
        let mut aggregator = BinaryErrorAggregator::new();
        aggregator.update(0.0, 1.0, 1.0);
        assert_eq!(aggregator.error_rate(), 1.0);
    }

    #[test]
    fn binary_error_before_updates_is_zero() {
        assert_eq!(BinaryErrorAggregator::new().summarize(), "0.000");
    }

    #[test]
    fn loss_aggregator_weights_its_mean() {
        let mut aggregator = LossAggregator::new(|p: f64, l: f64| (p - l).abs());
        aggregator.update(0.0, 1.0, 1.0); // loss 1.0, weight 1
        aggregator.update(1.0, 0.0, 3.0); // loss 1.0, weight 3
        aggregator.update(2.0, 2.0, 4.0); // loss 0.0, weight 4
        assert_eq!(aggregator.mean_loss(), 0.5);
        assert_eq!(aggregator.summarize(), "0.500000");
    }

    #[test]
    fn auc_perfect_and_inverted_ranking() {
        let mut aggregator = AucAggregator::new();
        aggregator.update(0.9, 1.0, 1.0);
        aggregator.update(0.8, 1.0, 1.0);
        aggregator.update(0.2, -1.0, 1.0);
        aggregator.update(0.1, -1.0, 1.0);
        assert_eq!(aggregator.auc(), 1.0);

        let mut inverted = AucAggregator::new();
        inverted.update(0.1, 1.0, 1.0);
        inverted.update(0.9, -1.0, 1.0);
        assert_eq!(inverted.auc(), 0.0);
    }

    #[test]
    fn auc_ties_get_half_credit() {
        let mut aggregator = AucAggregator::new();
        aggregator.update(0.5, 1.0, 1.0);
        aggregator.update(0.5, -1.0, 1.0);
        assert_eq!(aggregator.auc(), 0.5);
    }

    #[test]
    fn auc_respects_weights() {
        // One heavy well-ranked positive, one light poorly-ranked positive.
        let mut aggregator = AucAggregator::new();
        aggregator.update(0.9, 1.0, 3.0);
        aggregator.update(0.5, -1.0, 1.0);
        aggregator.update(0.1, 1.0, 1.0);
        // positive weight above the negative: 3 of 4.
        assert_eq!(aggregator.auc(), 0.75);
    }

    #[test]
    fn auc_degenerate_stream_is_half() {
        let mut aggregator = AucAggregator::new();
        aggregator.update(0.9, 1.0, 1.0);
        assert_eq!(aggregator.auc(), 0.5);
        assert!(AucAggregator::new().auc() == 0.5);
    }

    #[test]
    fn auc_terminates_on_nan_predictions() {
        // NaN compares unequal to everything, itself included; the sweep
        // must still consume it and finish.
        let mut aggregator = AucAggregator::new();
        aggregator.update(f64::NAN, 1.0, 1.0);
        aggregator.update(0.1, -1.0, 1.0);
        let auc = aggregator.auc();
        assert!((0.0..=1.0).contains(&auc), "auc out of range: {auc}");
        assert_eq!(aggregator.summarize(), aggregator.summarize());
    }

    #[test]
    fn summarize_does_not_mutate() {
        let mut aggregator = AucAggregator::new();
        aggregator.update(0.9, 1.0, 1.0);
        aggregator.update(0.1, -1.0, 1.0);
        let first = aggregator.summarize();
        let second = aggregator.summarize();
        assert_eq!(first, second);
        assert_eq!(aggregator.len(), 2);
    }
}
