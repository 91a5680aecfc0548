//! Discrete Fourier and numeric Laplace transforms.

pub mod fourier;
pub mod laplace;

pub use fourier::{fourier_transform, inverse_fourier_transform};
pub use laplace::{laplace_transform, laplace_transform_with};
