//! Parameter storage and the named parameter registry.

mod param;
mod registry;

pub use param::Param;
pub use registry::{ParamHandle, ParamRegistry};
