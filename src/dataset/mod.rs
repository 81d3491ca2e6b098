//! Dataset seam between models and their data source.

mod in_memory;

pub use in_memory::InMemoryDataset;

use burn::tensor::{backend::Backend, Tensor};

/// One minibatch: an input tensor and a target tensor of matched row count.
#[derive(Debug, Clone)]
pub struct Batch<B: Backend> {
    /// Input rows, shape `[batch_size, input_width]`.
    pub x: Tensor<B, 2>,
    /// Target rows, shape `[batch_size, target_width]`.
    pub y: Tensor<B, 2>,
}

/// A source of training batches.
pub trait Dataset<B: Backend> {
    /// Returns a lazy iterator covering the dataset exactly once in batches
    /// of at most `batch_size` rows. Each call restarts from the beginning.
    fn iterate_once(&self, batch_size: usize) -> Box<dyn Iterator<Item = Batch<B>> + '_>;

    /// Returns the current accuracy on a held-out validation set, in [0, 1],
    /// if the dataset carries one.
    fn validation_accuracy(&self) -> Option<f32> {
        None
    }
}
