//! Named parameter registry.
//!
//! The registry keeps one ordered, named list of parameters per model. Forward
//! passes read tensors through [`ParamHandle`]s issued at registration, and
//! gradient application walks the same list, so the parameters referenced by a
//! forward pass and the parameters receiving updates can never drift apart as
//! two independently ordered lists.

use burn::tensor::{
    backend::{AutodiffBackend, Backend},
    Tensor,
};

use super::Param;
use crate::errors::ModelError;

/// An opaque handle to a registered parameter.
///
/// Handles are only valid for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamHandle(usize);

/// An ordered collection of named parameters owned by one model.
#[derive(Debug)]
pub struct ParamRegistry<B: Backend> {
    params: Vec<Param<B>>,
}

impl<B: Backend> Default for ParamRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> ParamRegistry<B> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Registers a Glorot-initialized parameter of shape `rows x cols`.
    pub fn register(
        &mut self,
        name: &str,
        rows: usize,
        cols: usize,
        device: &B::Device,
    ) -> Result<ParamHandle, ModelError> {
        self.check_unique(name)?;
        self.params.push(Param::glorot(name, rows, cols, device));
        Ok(ParamHandle(self.params.len() - 1))
    }

    /// Registers a zero-initialized parameter of shape `rows x cols`.
    pub fn register_zeros(
        &mut self,
        name: &str,
        rows: usize,
        cols: usize,
        device: &B::Device,
    ) -> Result<ParamHandle, ModelError> {
        self.check_unique(name)?;
        self.params.push(Param::zeros(name, rows, cols, device));
        Ok(ParamHandle(self.params.len() - 1))
    }

    /// Returns the current value of a parameter as a computation-graph leaf.
    pub fn tensor(&self, handle: ParamHandle) -> Tensor<B, 2> {
        self.params[handle.0].value()
    }

    /// Applies `value += multiplier * delta` to one parameter.
    pub fn update(&mut self, handle: ParamHandle, multiplier: f64, delta: Tensor<B, 2>) {
        self.params[handle.0].update(multiplier, delta);
    }

    /// Returns the number of registered parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters are registered.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the registered parameter names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name())
    }

    fn check_unique(&self, name: &str) -> Result<(), ModelError> {
        if self.params.iter().any(|p| p.name() == name) {
            return Err(ModelError::DuplicateParameter {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl<B: AutodiffBackend> ParamRegistry<B> {
    /// Applies `value += step * grad` to every registered parameter, in
    /// registration order.
    ///
    /// A registered parameter the backward pass produced no gradient for was
    /// not part of the forward graph; that is a modelling bug, so it is logged
    /// rather than silently skipped.
    pub fn apply_gradients(&mut self, grads: &B::Gradients, step: f64) {
        for param in &mut self.params {
            match param.value().grad(grads) {
                Some(grad) => param.update(step, Tensor::from_inner(grad)),
                None => log::warn!(
                    "parameter '{}' received no gradient; skipping update",
                    param.name()
                ),
            }
        }
    }
}
