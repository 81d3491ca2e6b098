//! In-memory dataset backed by row-major vectors.

use burn::tensor::{backend::Backend, Tensor};

use super::{Batch, Dataset};
use crate::errors::ModelError;

/// A dataset held fully in memory as row-major `Vec<Vec<f32>>` data.
///
/// Rows are batched in insertion order; the final batch may be smaller than
/// the requested batch size.
#[derive(Debug, Clone)]
pub struct InMemoryDataset<B: Backend> {
    inputs: Vec<Vec<f32>>,
    targets: Vec<Vec<f32>>,
    device: B::Device,
}

impl<B: Backend> InMemoryDataset<B> {
    /// Creates a dataset from matched input and target rows.
    ///
    /// Fails if the dataset is empty, the input and target counts differ, or
    /// rows have inconsistent widths.
    pub fn new(
        inputs: Vec<Vec<f32>>,
        targets: Vec<Vec<f32>>,
        device: &B::Device,
    ) -> Result<Self, ModelError> {
        if inputs.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if inputs.len() != targets.len() {
            return Err(ModelError::ShapeMismatch {
                expected: inputs.len(),
                actual: targets.len(),
            });
        }
        check_widths(&inputs)?;
        check_widths(&targets)?;

        Ok(Self {
            inputs,
            targets,
            device: device.clone(),
        })
    }

    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl<B: Backend> Dataset<B> for InMemoryDataset<B> {
    fn iterate_once(&self, batch_size: usize) -> Box<dyn Iterator<Item = Batch<B>> + '_> {
        let batch_size = batch_size.max(1);
        Box::new(
            self.inputs
                .chunks(batch_size)
                .zip(self.targets.chunks(batch_size))
                .map(|(xs, ys)| Batch {
                    x: rows_to_tensor(xs, &self.device),
                    y: rows_to_tensor(ys, &self.device),
                }),
        )
    }
}

fn check_widths(rows: &[Vec<f32>]) -> Result<(), ModelError> {
    let width = rows[0].len();
    for row in rows {
        if row.len() != width {
            return Err(ModelError::ShapeMismatch {
                expected: width,
                actual: row.len(),
            });
        }
    }
    Ok(())
}

fn rows_to_tensor<B: Backend>(rows: &[Vec<f32>], device: &B::Device) -> Tensor<B, 2> {
    let cols = rows[0].len();
    let flat: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Tensor::<B, 1>::from_floats(flat.as_slice(), device).reshape([rows.len(), cols])
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn device() -> <TestBackend as Backend>::Device {
        <TestBackend as Backend>::Device::default()
    }

    #[test]
    fn test_batches_cover_dataset_once() {
        let dataset: InMemoryDataset<TestBackend> = InMemoryDataset::new(
            vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]],
            vec![vec![10.0], vec![20.0], vec![30.0], vec![40.0], vec![50.0]],
            &device(),
        )
        .expect("Dataset creation should succeed");

        let batches: Vec<_> = dataset.iterate_once(2).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].x.dims(), [2, 1]);
        assert_eq!(batches[1].x.dims(), [2, 1]);
        // Final partial batch
        assert_eq!(batches[2].x.dims(), [1, 1]);

        let last_target: Vec<f32> = batches[2].y.clone().into_data().to_vec().unwrap();
        assert_eq!(last_target, vec![50.0]);
    }

    #[test]
    fn test_iterate_once_restarts() {
        let dataset: InMemoryDataset<TestBackend> = InMemoryDataset::new(
            vec![vec![1.0], vec![2.0]],
            vec![vec![1.0], vec![2.0]],
            &device(),
        )
        .expect("Dataset creation should succeed");

        assert_eq!(dataset.iterate_once(1).count(), 2);
        assert_eq!(dataset.iterate_once(1).count(), 2);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = InMemoryDataset::<TestBackend>::new(vec![], vec![], &device());
        assert!(matches!(result, Err(ModelError::EmptyDataset)));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = InMemoryDataset::<TestBackend>::new(
            vec![vec![1.0], vec![2.0]],
            vec![vec![1.0]],
            &device(),
        );
        assert!(matches!(result, Err(ModelError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = InMemoryDataset::<TestBackend>::new(
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![vec![1.0], vec![2.0]],
            &device(),
        );
        assert!(matches!(result, Err(ModelError::ShapeMismatch { .. })));
    }
}
