//! Convergence policies for the training loop.
//!
//! Each model's stopping rule is a [`ConvergencePolicy`] the shared loop asks
//! once per epoch, so loss-threshold, validation-accuracy and epoch-cap rules
//! compose without duplicating the loop body.

/// Summary of one full pass over the dataset.
#[derive(Debug, Clone)]
pub struct EpochStats {
    /// 1-based epoch counter.
    pub epoch: usize,
    /// Mean loss over all batches of the epoch.
    pub mean_loss: f32,
    /// Loss of the last batch of the epoch.
    pub final_batch_loss: f32,
    /// Validation accuracy reported by the dataset, if it carries an oracle.
    pub validation_accuracy: Option<f32>,
}

/// A stopping rule evaluated once per epoch.
pub trait ConvergencePolicy {
    /// Returns true when training should stop.
    fn should_stop(&mut self, stats: &EpochStats) -> bool;
}

/// Stops once the mean epoch loss falls below a threshold.
#[derive(Debug, Clone)]
pub struct LossThreshold {
    threshold: f32,
}

impl LossThreshold {
    /// Creates a policy stopping below `threshold`.
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl ConvergencePolicy for LossThreshold {
    fn should_stop(&mut self, stats: &EpochStats) -> bool {
        stats.mean_loss < self.threshold
    }
}

/// Stops once the dataset's validation accuracy exceeds a target.
///
/// Never stops on datasets without a validation oracle.
#[derive(Debug, Clone)]
pub struct ValidationAccuracy {
    target: f32,
}

impl ValidationAccuracy {
    /// Creates a policy stopping above `target` accuracy.
    pub fn new(target: f32) -> Self {
        Self { target }
    }
}

impl ConvergencePolicy for ValidationAccuracy {
    fn should_stop(&mut self, stats: &EpochStats) -> bool {
        stats
            .validation_accuracy
            .is_some_and(|accuracy| accuracy > self.target)
    }
}

/// Stops after a fixed number of epochs.
#[derive(Debug, Clone)]
pub struct MaxEpochs {
    limit: usize,
}

impl MaxEpochs {
    /// Creates a policy stopping after `limit` epochs.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl ConvergencePolicy for MaxEpochs {
    fn should_stop(&mut self, stats: &EpochStats) -> bool {
        stats.epoch >= self.limit
    }
}

/// Stops as soon as any of the wrapped policies would stop.
pub struct AnyOf {
    policies: Vec<Box<dyn ConvergencePolicy>>,
}

impl AnyOf {
    /// Creates a composite policy from the given policies.
    pub fn new(policies: Vec<Box<dyn ConvergencePolicy>>) -> Self {
        Self { policies }
    }
}

impl ConvergencePolicy for AnyOf {
    fn should_stop(&mut self, stats: &EpochStats) -> bool {
        // Every policy sees every epoch, even after one has already fired.
        let mut stop = false;
        for policy in &mut self.policies {
            stop |= policy.should_stop(stats);
        }
        stop
    }
}
