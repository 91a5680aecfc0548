//! Linear-system, root-finding, ODE and finite-difference solvers.

use crate::utils::convergence::SolveStats;

/// Common interface for direct linear solvers.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, writing result into `x`.
    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<SolveStats<f64>, Self::Error>;
}

pub mod gauss;
pub use gauss::{GaussSolver, solve_linear_system};

pub mod direct_lu;
pub use direct_lu::LuSolver;

pub mod roots;
pub use roots::{RootResult, bisection_method, newton_method, newton_method_with, secant_method};

pub mod ode;
pub use ode::{solve_first_order_ode, solve_first_order_ode_rk4, solve_second_order_ode};

pub mod fem;
pub use fem::solve_fem;
