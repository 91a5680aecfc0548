//! API options for iterative, integrating and learning routines.
//!
//! Every operation that takes one of these structs also has a positional
//! form that uses the `Default` values below, so callers only reach for the
//! options when they need to override a budget or a step size.

/// Stopping criteria for iterative methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterOptions {
    /// Absolute tolerance on the step (or bracket width)
    pub tol: f64,

    /// Iteration cap; hitting it is reported, not treated as an error
    pub max_iters: usize,
}

impl Default for IterOptions {
    fn default() -> Self {
        Self { tol: 1e-6, max_iters: 100 }
    }
}

/// Truncated quadrature settings shared by the calculus and Laplace routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationOptions {
    /// Number of trapezoid panels
    pub steps: usize,

    /// Upper limit used in place of infinity for improper integrals
    pub upper_limit: f64,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self { steps: 10_000, upper_limit: 100.0 }
    }
}

/// Subgradient settings for the linear SVM and SVR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmOptions {
    /// Passes over the training set
    pub iterations: usize,

    /// Fixed step size
    pub learning_rate: f64,

    /// L2 penalty λ on the weight vector
    pub regularization: f64,

    /// Half-width of the SVR insensitive tube
    pub epsilon: f64,
}

impl Default for SvmOptions {
    fn default() -> Self {
        Self {
            iterations: 100,
            learning_rate: 0.01,
            regularization: 0.01,
            epsilon: 0.1,
        }
    }
}
