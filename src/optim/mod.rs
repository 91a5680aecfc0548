//! Unconstrained minimization.

pub mod gradient_descent;

pub use gradient_descent::{
    OptimResult, gradient_descent, gradient_descent_with, linear_programming,
};
