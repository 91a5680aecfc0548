//! numerix: stateless numerical toolkit over Faer
//!
//! Dense linear algebra, graph search, clustering and classification, scalar
//! root finding, ODE and 1-D FEM solvers, gradient descent and DFT/Laplace
//! transforms. Every operation is a plain function of its inputs; nothing is
//! cached between calls, so the whole crate is safe to use from many threads.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub mod algebra;
pub mod graph;
pub mod learn;
pub mod matrix;
pub mod optim;
pub mod primitives;
pub mod solver;
pub mod stats;
pub mod transform;

// Re-exports for convenience
pub use algebra::*;
pub use config::*;
pub use self::core::*;
pub use error::{ErrorKind, NError, Result};
pub use graph::*;
pub use learn::*;
pub use matrix::*;
pub use optim::*;
pub use primitives::*;
pub use solver::*;
pub use stats::*;
pub use transform::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
