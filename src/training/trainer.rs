//! Training loop implementation.

use burn::tensor::{backend::AutodiffBackend, ElementConversion};

use super::{ConvergencePolicy, EpochStats, TrainingConfig};
use crate::dataset::Dataset;
use crate::models::GradientModel;

/// Training result with per-epoch metrics.
#[derive(Debug)]
pub struct TrainingResult {
    /// Number of full dataset passes performed.
    pub epochs_run: usize,
    /// Mean loss per epoch.
    pub loss_history: Vec<f32>,
}

/// Trains a model by fixed-rate gradient descent until `policy` stops it.
///
/// Each step builds the loss graph for one batch, runs the backward pass and
/// applies `param += -learning_rate * grad` to every registered parameter in
/// registration order. The policy is consulted once per full dataset pass, so
/// a policy that never fires (for example a loss threshold the model cannot
/// reach) keeps the loop running indefinitely.
pub fn train<B, M, D, P>(
    model: &mut M,
    dataset: &D,
    config: &TrainingConfig,
    policy: &mut P,
) -> TrainingResult
where
    B: AutodiffBackend,
    M: GradientModel<B>,
    D: Dataset<B>,
    P: ConvergencePolicy + ?Sized,
{
    let mut loss_history = Vec::new();
    let mut epoch = 0;

    loop {
        epoch += 1;
        let mut loss_sum = 0.0f32;
        let mut final_batch_loss = 0.0f32;
        let mut batches = 0usize;

        for batch in dataset.iterate_once(config.batch_size) {
            let loss = model.loss(batch.x, batch.y);
            let loss_value: f32 = loss.clone().into_scalar().elem();

            let grads = loss.backward();
            model.params_mut().apply_gradients(&grads, -config.learning_rate);

            loss_sum += loss_value;
            final_batch_loss = loss_value;
            batches += 1;
        }

        let mean_loss = if batches == 0 {
            0.0
        } else {
            loss_sum / batches as f32
        };
        loss_history.push(mean_loss);

        let stats = EpochStats {
            epoch,
            mean_loss,
            final_batch_loss,
            validation_accuracy: dataset.validation_accuracy(),
        };

        if config.verbose && (epoch == 1 || epoch % 10 == 0) {
            log::info!("Epoch {}: mean loss = {:.6}", epoch, mean_loss);
        }

        if policy.should_stop(&stats) {
            return TrainingResult {
                epochs_run: epoch,
                loss_history,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use crate::models::RegressionModel;
    use crate::training::MaxEpochs;
    use burn::backend::{Autodiff, NdArray};

    type TrainingBackend = Autodiff<NdArray>;

    #[test]
    fn test_training_reduces_loss() {
        let device = <TrainingBackend as burn::tensor::backend::Backend>::Device::default();

        let mut model: RegressionModel<TrainingBackend> =
            RegressionModel::new(&device).expect("Model build should succeed");

        // y = 2x
        let dataset = InMemoryDataset::new(
            vec![vec![0.0], vec![0.5], vec![1.0], vec![1.5], vec![2.0]],
            vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
            &device,
        )
        .expect("Dataset creation should succeed");

        let config = TrainingConfig::new().learning_rate(0.01).verbose(false);
        let mut policy = MaxEpochs::new(100);

        let result = train(&mut model, &dataset, &config, &mut policy);

        assert_eq!(result.epochs_run, 100);
        assert_eq!(result.loss_history.len(), 100);

        let initial_loss = result.loss_history.first().copied().unwrap_or(f32::MAX);
        let final_loss = result.loss_history.last().copied().unwrap_or(f32::MAX);
        assert!(
            final_loss < initial_loss,
            "Loss should decrease: initial={}, final={}",
            initial_loss,
            final_loss
        );
    }

    #[test]
    fn test_loss_history_matches_epochs_run() {
        let device = <TrainingBackend as burn::tensor::backend::Backend>::Device::default();

        let mut model: RegressionModel<TrainingBackend> =
            RegressionModel::new(&device).expect("Model build should succeed");

        let dataset = InMemoryDataset::new(vec![vec![1.0]], vec![vec![1.0]], &device)
            .expect("Dataset creation should succeed");

        let config = TrainingConfig::new().learning_rate(0.001).verbose(false);
        let mut policy = MaxEpochs::new(5);

        let result = train(&mut model, &dataset, &config, &mut policy);
        assert_eq!(result.epochs_run, 5);
        assert_eq!(result.loss_history.len(), 5);
    }
}
