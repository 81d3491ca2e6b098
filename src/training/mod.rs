//! Training utilities for the models.
//!
//! This module provides:
//! - Loss functions (MSE, softmax cross-entropy)
//! - Training configuration
//! - Convergence policies
//! - The shared fixed-rate gradient-descent loop

mod config;
mod convergence;
mod loss;
mod trainer;

pub use config::TrainingConfig;
pub use convergence::{
    AnyOf, ConvergencePolicy, EpochStats, LossThreshold, MaxEpochs, ValidationAccuracy,
};
pub use loss::Loss;
pub use trainer::{train, TrainingResult};

use burn::tensor::{backend::Backend, ElementConversion, Tensor};

/// Extracts the plain numeric value of a one-element node.
pub fn as_scalar<B: Backend>(node: Tensor<B, 1>) -> f32 {
    node.into_scalar().elem()
}
