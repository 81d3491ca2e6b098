//! Loss functions for training.

use burn::tensor::{activation, backend::Backend, Tensor};
use serde::{Deserialize, Serialize};

/// Supported loss functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    /// Mean Squared Error loss.
    Mse,
    /// Softmax cross-entropy against one-hot targets.
    SoftmaxCrossEntropy,
}

impl Loss {
    /// Computes the scalar loss node for a batch of predictions and targets.
    pub fn compute<B: Backend>(
        &self,
        predictions: Tensor<B, 2>,
        targets: Tensor<B, 2>,
    ) -> Tensor<B, 1> {
        match self {
            Loss::Mse => {
                let diff = predictions - targets;
                let squared = diff.clone() * diff;
                squared.mean()
            }
            Loss::SoftmaxCrossEntropy => {
                let log_probs = activation::log_softmax(predictions, 1);
                (targets * log_probs).sum_dim(1).neg().mean()
            }
        }
    }
}
