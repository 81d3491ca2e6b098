//! Training configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the gradient-descent training loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Fixed learning rate applied to every update.
    pub learning_rate: f64,
    /// Batch size for training.
    pub batch_size: usize,
    /// Whether to log progress during training.
    pub verbose: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            batch_size: 32,
            verbose: true,
        }
    }
}

impl TrainingConfig {
    /// Creates a new TrainingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets whether to log progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert!((config.learning_rate - 0.001).abs() < 1e-10);
        assert_eq!(config.batch_size, 32);
        assert!(config.verbose);
    }

    #[test]
    fn test_config_builder() {
        let config = TrainingConfig::new()
            .learning_rate(0.5)
            .batch_size(100)
            .verbose(false);

        assert!((config.learning_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.batch_size, 100);
        assert!(!config.verbose);
    }
}
