//! Binary perceptron classifier.

use burn::tensor::{backend::Backend, Tensor};

use crate::dataset::Dataset;
use crate::errors::ModelError;
use crate::params::{ParamHandle, ParamRegistry};
use crate::training::as_scalar;

/// A linear perceptron classifying data points as +1 or -1.
///
/// Holds a single weight row of shape `1 x dim`. Training is mistake driven
/// and does not use the gradient engine: each misclassified example adds the
/// label-scaled feature vector to the weights.
pub struct PerceptronModel<B: Backend> {
    params: ParamRegistry<B>,
    weights: ParamHandle,
    dim: usize,
}

impl<B: Backend> PerceptronModel<B> {
    /// Creates a perceptron for `dim`-dimensional data with random weights.
    pub fn new(dim: usize, device: &B::Device) -> Result<Self, ModelError> {
        let mut params = ParamRegistry::new();
        let weights = params.register("w", 1, dim, device)?;
        Ok(Self {
            params,
            weights,
            dim,
        })
    }

    /// Creates a perceptron with all-zero weights.
    pub fn with_zero_weights(dim: usize, device: &B::Device) -> Result<Self, ModelError> {
        let mut params = ParamRegistry::new();
        let weights = params.register_zeros("w", 1, dim, device)?;
        Ok(Self {
            params,
            weights,
            dim,
        })
    }

    /// Returns the dimensionality of the data this perceptron classifies.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the current weight row, shape `[1, dim]`.
    pub fn weights(&self) -> Tensor<B, 2> {
        self.params.tensor(self.weights)
    }

    /// Computes the score for a single data point of shape `[1, dim]`:
    /// the dot product of the weight row and the point.
    pub fn run(&self, x: Tensor<B, 2>) -> Tensor<B, 1> {
        (self.weights() * x).sum()
    }

    /// Returns the predicted class for a single data point: -1 if the score
    /// is negative, +1 otherwise. A score of exactly zero maps to +1.
    pub fn predict(&self, x: Tensor<B, 2>) -> i32 {
        if as_scalar(self.run(x)) < 0.0 {
            -1
        } else {
            1
        }
    }

    /// Trains until a full sweep over the dataset produces zero mistakes,
    /// returning the number of sweeps performed.
    ///
    /// Convergence is only guaranteed for linearly separable data; on
    /// non-separable data this loop does not terminate.
    pub fn train<D: Dataset<B>>(&mut self, dataset: &D) -> usize {
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            let mut mistakes = 0usize;

            for batch in dataset.iterate_once(1) {
                let label_node: Tensor<B, 1> = batch.y.reshape([1]);
                let label = as_scalar(label_node);
                let prediction = self.predict(batch.x.clone());

                if prediction as f32 != label {
                    mistakes += 1;
                    // w <- w + y * x
                    self.params.update(self.weights, f64::from(label), batch.x);
                }
            }

            log::debug!("Sweep {}: {} misclassified", sweeps, mistakes);
            if mistakes == 0 {
                return sweeps;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn device() -> <TestBackend as Backend>::Device {
        <TestBackend as Backend>::Device::default()
    }

    fn point(values: &[f32]) -> Tensor<TestBackend, 2> {
        Tensor::<TestBackend, 1>::from_floats(values, &device()).reshape([1, values.len()])
    }

    #[test]
    fn test_zero_score_predicts_positive() {
        let model = PerceptronModel::<TestBackend>::with_zero_weights(2, &device())
            .expect("Model build should succeed");

        // Zero weights give a zero score for every point.
        assert_eq!(model.predict(point(&[3.0, -1.0])), 1);
        assert_eq!(model.predict(point(&[0.0, 0.0])), 1);
    }

    #[test]
    fn test_run_is_dot_product() {
        let mut model = PerceptronModel::<TestBackend>::with_zero_weights(3, &device())
            .expect("Model build should succeed");
        model
            .params
            .update(model.weights, 1.0, point(&[1.0, 2.0, 3.0]));

        let score = as_scalar(model.run(point(&[4.0, 5.0, 6.0])));
        assert!((score - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_one_dimensional_scenario() {
        let mut model = PerceptronModel::<TestBackend>::with_zero_weights(1, &device())
            .expect("Model build should succeed");

        let dataset = InMemoryDataset::new(
            vec![vec![1.0], vec![-1.0]],
            vec![vec![1.0], vec![-1.0]],
            &device(),
        )
        .expect("Dataset creation should succeed");

        model.train(&dataset);

        assert_eq!(model.predict(point(&[1.0])), 1);
        assert_eq!(model.predict(point(&[-1.0])), -1);
    }
}
