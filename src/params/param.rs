//! Trainable parameter tensors.

use burn::tensor::{backend::Backend, Distribution, Tensor};

/// A named, trainable 2D tensor.
///
/// Parameters are created once at model construction with a fixed shape and
/// are mutated in place by scaled-gradient updates; they are never resized.
#[derive(Debug, Clone)]
pub struct Param<B: Backend> {
    name: String,
    value: Tensor<B, 2>,
}

impl<B: Backend> Param<B> {
    /// Creates a parameter with Glorot-uniform random initialization.
    pub(crate) fn glorot(name: &str, rows: usize, cols: usize, device: &B::Device) -> Self {
        let bound = (6.0 / (rows + cols) as f64).sqrt();
        let value = Tensor::random([rows, cols], Distribution::Uniform(-bound, bound), device)
            .require_grad();
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Creates a zero-initialized parameter.
    pub(crate) fn zeros(name: &str, rows: usize, cols: usize, device: &B::Device) -> Self {
        Self {
            name: name.to_string(),
            value: Tensor::zeros([rows, cols], device).require_grad(),
        }
    }

    /// Returns the parameter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter's shape as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        self.value.dims()
    }

    /// Returns the current value as a computation-graph leaf.
    pub fn value(&self) -> Tensor<B, 2> {
        self.value.clone()
    }

    /// Applies the in-place update `value += multiplier * delta`.
    ///
    /// The previous computation graph is detached so the updated value is a
    /// fresh leaf for the next forward pass.
    pub fn update(&mut self, multiplier: f64, delta: Tensor<B, 2>) {
        let updated = self.value.clone() + delta.mul_scalar(multiplier);
        self.value = updated.detach().require_grad();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_param_shape_and_name() {
        let device = <TestBackend as Backend>::Device::default();
        let param = Param::<TestBackend>::glorot("w", 3, 4, &device);

        assert_eq!(param.name(), "w");
        assert_eq!(param.shape(), [3, 4]);
    }

    #[test]
    fn test_update_law() {
        let device = <TestBackend as Backend>::Device::default();
        let mut param = Param::<TestBackend>::zeros("w", 2, 2, &device);

        let delta = Tensor::<TestBackend, 2>::from_floats([[1.0, 2.0], [3.0, 4.0]], &device);
        param.update(0.5, delta.clone());
        param.update(1.0, delta);

        // 0 + 0.5*d + 1.0*d = 1.5*d
        let result: Vec<f32> = param.value().into_data().to_vec().unwrap();
        assert_eq!(result, vec![1.5, 3.0, 4.5, 6.0]);
    }

    #[test]
    fn test_glorot_values_within_bound() {
        let device = <TestBackend as Backend>::Device::default();
        let param = Param::<TestBackend>::glorot("w", 4, 8, &device);

        let bound = (6.0f32 / 12.0).sqrt();
        let values: Vec<f32> = param.value().into_data().to_vec().unwrap();
        assert!(values.iter().all(|v| v.abs() <= bound));
    }
}
