//! Seeded synthetic datasets for tests and demos.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{dataset::Dataset, example::Example, vector::DataVector};
use crate::predictors::LinearPredictor;

/// Generate a linearly separable binary dataset along with the separating
/// linear predictor.
///
/// Features are uniform in [-1, 1], labels are the sign of the separating
/// hyperplane score (ties pushed to +1), and every example has weight 1.0.
/// The same seed always produces the same dataset.
pub fn linearly_separable(
    num_examples: usize,
    dimension: usize,
    seed: u64,
) -> (Dataset, LinearPredictor) {
    let mut rng = StdRng::seed_from_u64(seed);

    let weights: Vec<f64> = (0..dimension).map(|_| rng.random_range(-1.0..1.0)).collect();
    let bias = rng.random_range(-0.25..0.25);
    let predictor = LinearPredictor::new(weights, bias);

    let mut dataset = Dataset::new();
    for _ in 0..num_examples {
        let values: Vec<f64> = (0..dimension).map(|_| rng.random_range(-1.0..1.0)).collect();
        let vector = DataVector::dense(values);
        let score = predictor.score(&vector);
        let label = if score >= 0.0 { 1.0 } else { -1.0 };
        dataset.push(Example::new(vector, label, 1.0));
    }

    (dataset, predictor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Predictor;

    #[test]
    fn generation_is_deterministic() {
        let (first, _) = linearly_separable(20, 3, 7);
        let (second, _) = linearly_separable(20, 3, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn generator_separates_its_own_data() {
        let (dataset, predictor) = linearly_separable(50, 4, 42);
        assert_eq!(dataset.len(), 50);
        for example in dataset.iter() {
            let prediction = predictor.predict(example.vector());
            assert!(
                prediction * example.label() >= 0.0,
                "label must match the separating hyperplane"
            );
        }
    }
}
