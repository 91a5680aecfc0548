//! Matrix module: dense construction, arithmetic, determinants and 2×2 eigen.

pub mod dense;
pub use dense::{
    DenseMatrix, add, from_rows, identity, multiply, multiply_vector, scale, subtract, to_rows,
    trace, transpose,
};
pub mod determinant;
pub use determinant::{adjugate, cofactor, determinant, inverse, minor};
pub mod eigen;
pub use eigen::{eigenvalues, eigenvectors};
