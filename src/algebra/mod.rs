//! Polynomial root finding and finite-difference calculus.

pub mod calculus;
pub mod polynomial;

pub use calculus::{derivative, integrate, integrate_simpson, integrate_with, limit, second_derivative};
pub use polynomial::{polynomial_roots, real_roots, solve_cubic, solve_linear, solve_quadratic};
