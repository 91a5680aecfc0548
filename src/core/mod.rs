//! Shared vector-space traits and their implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatVec};
