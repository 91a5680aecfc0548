//! Bookkeeping shared by the iterative routines.

pub mod convergence;

pub use convergence::{Convergence, SolveStats};
