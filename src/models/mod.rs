//! The three feed-forward models.

mod digits;
mod perceptron;
mod regression;

pub use digits::DigitClassificationModel;
pub use perceptron::PerceptronModel;
pub use regression::RegressionModel;

use burn::tensor::{backend::AutodiffBackend, Tensor};

use crate::params::ParamRegistry;

/// A model trainable by the shared gradient-descent loop.
///
/// Implementors build the loss graph for one batch from the parameters in
/// their registry; the loop obtains gradients from the loss node and applies
/// the scaled update through the same registry.
pub trait GradientModel<B: AutodiffBackend> {
    /// Builds the scalar loss node for one batch.
    fn loss(&self, x: Tensor<B, 2>, y: Tensor<B, 2>) -> Tensor<B, 1>;

    /// Returns the model's parameter registry.
    fn params(&self) -> &ParamRegistry<B>;

    /// Returns the model's parameter registry mutably.
    fn params_mut(&mut self) -> &mut ParamRegistry<B>;
}
