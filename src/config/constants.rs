//! Numeric thresholds and physical constants.
//!
//! Thresholds are compared against absolute magnitudes unless noted.

/// Gaussian elimination aborts when a pivot falls below this.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Newton's method aborts when |f'(x)| falls below this.
pub const DERIVATIVE_EPSILON: f64 = 1e-10;

/// A determinant smaller than this in magnitude has no inverse.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Floor applied to per-class feature variances in Naive Bayes.
pub const VARIANCE_FLOOR: f64 = 1e-6;

/// k-means stops once no centroid coordinate moves further than this.
pub const CENTROID_EPSILON: f64 = 1e-9;

/// Largest matrix order accepted by cofactor expansion (cost is O(n!)).
pub const MAX_COFACTOR_ORDER: usize = 10;

/// Largest vertex count accepted by the Hamiltonian path search.
pub const MAX_HAMILTONIAN_VERTICES: usize = 20;

/// Largest step count a fixed-step ODE integrator will take.
pub const MAX_ODE_STEPS: usize = 10_000_000;

/// Step used by the central-difference derivative.
pub const DIFF_STEP: f64 = 1e-5;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Planck constant, J s.
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Molar gas constant, J mol⁻¹ K⁻¹.
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Elementary charge, C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Standard acceleration of gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;
