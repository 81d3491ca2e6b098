//! # gradnet
//!
//! Three small feed-forward models — a linear perceptron, a scalar regression
//! network and a multi-class digit classifier — trained by manual fixed-rate
//! gradient-descent loops on top of the Burn autodiff framework.
//!
//! The crate's substance is the shared training pattern: build a computation
//! graph from registered parameters and an input batch, compute a scalar
//! loss, obtain reverse-mode gradients, apply a scaled update through the
//! parameter registry, and repeat until a convergence policy stops the loop.
//! The autodiff engine itself is Burn's; this crate never reimplements it.
//!
//! ## Example
//!
//! ```
//! use gradnet::prelude::*;
//!
//! type Backend = gradnet::TrainBackend;
//!
//! let device = <Backend as burn::tensor::backend::Backend>::Device::default();
//!
//! // A linearly separable one-dimensional dataset: label = sign(x).
//! let dataset: InMemoryDataset<Backend> = InMemoryDataset::new(
//!     vec![vec![1.0], vec![-1.0]],
//!     vec![vec![1.0], vec![-1.0]],
//!     &device,
//! )
//! .expect("Failed to build dataset");
//!
//! let mut model = PerceptronModel::with_zero_weights(1, &device)
//!     .expect("Failed to build model");
//! model.train(&dataset);
//!
//! let x = burn::tensor::Tensor::<Backend, 1>::from_floats([-1.0], &device).reshape([1, 1]);
//! assert_eq!(model.predict(x), -1);
//! ```

pub mod dataset;
pub mod errors;
pub mod models;
pub mod params;
pub mod training;

// Re-exports for convenience
pub use dataset::{Batch, Dataset, InMemoryDataset};
pub use errors::ModelError;
pub use models::{DigitClassificationModel, GradientModel, PerceptronModel, RegressionModel};
pub use params::{Param, ParamHandle, ParamRegistry};
pub use training::{Loss, TrainingConfig, TrainingResult};

/// Backend type alias for training (ndarray with autodiff support).
pub type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// Backend type for inference (no autodiff).
pub type InferenceBackend = burn::backend::NdArray;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dataset::{Batch, Dataset, InMemoryDataset};
    pub use crate::errors::ModelError;
    pub use crate::models::{
        DigitClassificationModel, GradientModel, PerceptronModel, RegressionModel,
    };
    pub use crate::params::{Param, ParamHandle, ParamRegistry};
    pub use crate::training::{
        as_scalar, train, AnyOf, ConvergencePolicy, EpochStats, Loss, LossThreshold, MaxEpochs,
        TrainingConfig, TrainingResult, ValidationAccuracy,
    };
    pub use crate::{InferenceBackend, TrainBackend};
}
