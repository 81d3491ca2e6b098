//! Scalar regression network.

use burn::tensor::{
    activation,
    backend::{AutodiffBackend, Backend},
    Tensor,
};

use super::GradientModel;
use crate::dataset::Dataset;
use crate::errors::ModelError;
use crate::params::{ParamHandle, ParamRegistry};
use crate::training::{train, Loss, LossThreshold, TrainingConfig, TrainingResult};

/// A 3-layer fully connected network (1 -> 32 -> 16 -> 1) approximating a
/// scalar function, with relu on the hidden layers and a linear output.
pub struct RegressionModel<B: Backend> {
    params: ParamRegistry<B>,
    w1: ParamHandle,
    b1: ParamHandle,
    w2: ParamHandle,
    b2: ParamHandle,
    w3: ParamHandle,
    b3: ParamHandle,
}

impl<B: Backend> RegressionModel<B> {
    /// Fixed learning rate for training; also the loss threshold the default
    /// stopping rule compares against.
    pub const LEARNING_RATE: f64 = 0.001;
    /// Batch size used by [`RegressionModel::train`].
    pub const BATCH_SIZE: usize = 1;

    /// Creates the model with freshly initialized parameters.
    pub fn new(device: &B::Device) -> Result<Self, ModelError> {
        let mut params = ParamRegistry::new();
        let w1 = params.register("w1", 1, 32, device)?;
        let b1 = params.register("b1", 1, 32, device)?;
        let w2 = params.register("w2", 32, 16, device)?;
        let b2 = params.register("b2", 1, 16, device)?;
        let w3 = params.register("w3", 16, 1, device)?;
        let b3 = params.register("b3", 1, 1, device)?;
        Ok(Self {
            params,
            w1,
            b1,
            w2,
            b2,
            w3,
            b3,
        })
    }

    /// Predicts y-values for a batch of scalar inputs, shape `[batch, 1]`.
    pub fn run(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let h1 = activation::relu(x.matmul(self.params.tensor(self.w1)) + self.params.tensor(self.b1));
        let h2 = activation::relu(h1.matmul(self.params.tensor(self.w2)) + self.params.tensor(self.b2));
        h2.matmul(self.params.tensor(self.w3)) + self.params.tensor(self.b3)
    }

    /// Computes the squared-error loss for a batch of examples.
    pub fn get_loss(&self, x: Tensor<B, 2>, y: Tensor<B, 2>) -> Tensor<B, 1> {
        Loss::Mse.compute(self.run(x), y)
    }
}

impl<B: AutodiffBackend> RegressionModel<B> {
    /// Trains one example at a time with a fixed learning rate until the mean
    /// epoch loss falls below the learning rate.
    ///
    /// Does not terminate if the model never reaches the threshold.
    pub fn train<D: Dataset<B>>(&mut self, dataset: &D) -> TrainingResult {
        let config = TrainingConfig::new()
            .learning_rate(Self::LEARNING_RATE)
            .batch_size(Self::BATCH_SIZE)
            .verbose(false);
        let mut policy = LossThreshold::new(Self::LEARNING_RATE as f32);
        train(self, dataset, &config, &mut policy)
    }
}

impl<B: AutodiffBackend> GradientModel<B> for RegressionModel<B> {
    fn loss(&self, x: Tensor<B, 2>, y: Tensor<B, 2>) -> Tensor<B, 1> {
        self.get_loss(x, y)
    }

    fn params(&self) -> &ParamRegistry<B> {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamRegistry<B> {
        &mut self.params
    }
}
