//! Handwritten digit classifier.

use burn::tensor::{
    activation,
    backend::{AutodiffBackend, Backend},
    Tensor,
};

use super::GradientModel;
use crate::dataset::Dataset;
use crate::errors::ModelError;
use crate::params::{ParamHandle, ParamRegistry};
use crate::training::{train, Loss, TrainingConfig, TrainingResult, ValidationAccuracy};

/// A 4-layer fully connected network (784 -> 261 -> 88 -> 30 -> 10) sorting
/// 28x28 grayscale digit images into the classes 0 through 9.
///
/// Inputs are flattened 784-dimensional pixel rows; the output row per example
/// holds unnormalized class scores (logits).
pub struct DigitClassificationModel<B: Backend> {
    params: ParamRegistry<B>,
    w1: ParamHandle,
    b1: ParamHandle,
    w2: ParamHandle,
    b2: ParamHandle,
    w3: ParamHandle,
    b3: ParamHandle,
    w4: ParamHandle,
    b4: ParamHandle,
}

impl<B: Backend> DigitClassificationModel<B> {
    /// Fixed learning rate for training.
    pub const LEARNING_RATE: f64 = 0.5;
    /// Batch size used by [`DigitClassificationModel::train`].
    pub const BATCH_SIZE: usize = 100;
    /// Validation accuracy at which training stops.
    pub const TARGET_ACCURACY: f32 = 0.98;

    /// Creates the model with freshly initialized parameters.
    pub fn new(device: &B::Device) -> Result<Self, ModelError> {
        let mut params = ParamRegistry::new();
        let w1 = params.register("w1", 784, 261, device)?;
        let b1 = params.register("b1", 1, 261, device)?;
        let w2 = params.register("w2", 261, 88, device)?;
        let b2 = params.register("b2", 1, 88, device)?;
        let w3 = params.register("w3", 88, 30, device)?;
        let b3 = params.register("b3", 1, 30, device)?;
        let w4 = params.register("w4", 30, 10, device)?;
        let b4 = params.register("b4", 1, 10, device)?;
        Ok(Self {
            params,
            w1,
            b1,
            w2,
            b2,
            w3,
            b3,
            w4,
            b4,
        })
    }

    /// Predicts class scores for a batch of images, shape `[batch, 10]`.
    pub fn run(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let h1 = activation::relu(x.matmul(self.params.tensor(self.w1)) + self.params.tensor(self.b1));
        let h2 = activation::relu(h1.matmul(self.params.tensor(self.w2)) + self.params.tensor(self.b2));
        let h3 = activation::relu(h2.matmul(self.params.tensor(self.w3)) + self.params.tensor(self.b3));
        h3.matmul(self.params.tensor(self.w4)) + self.params.tensor(self.b4)
    }

    /// Computes the softmax cross-entropy loss against one-hot targets of
    /// shape `[batch, 10]`.
    pub fn get_loss(&self, x: Tensor<B, 2>, y: Tensor<B, 2>) -> Tensor<B, 1> {
        Loss::SoftmaxCrossEntropy.compute(self.run(x), y)
    }
}

impl<B: AutodiffBackend> DigitClassificationModel<B> {
    /// Trains on minibatches of 100 with a fixed learning rate until the
    /// dataset's validation accuracy exceeds 0.98, checked once per sweep.
    ///
    /// Does not terminate on a dataset without a validation oracle.
    pub fn train<D: Dataset<B>>(&mut self, dataset: &D) -> TrainingResult {
        let config = TrainingConfig::new()
            .learning_rate(Self::LEARNING_RATE)
            .batch_size(Self::BATCH_SIZE)
            .verbose(false);
        let mut policy = ValidationAccuracy::new(Self::TARGET_ACCURACY);
        train(self, dataset, &config, &mut policy)
    }
}

impl<B: AutodiffBackend> GradientModel<B> for DigitClassificationModel<B> {
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
