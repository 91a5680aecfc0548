use thiserror::Error;

// Unified error type for numerix

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("f(a) = {fa} and f(b) = {fb} do not bracket a root")]
    SameSignBracket { fa: f64, fb: f64 },
    #[error("matrix is singular (zero determinant)")]
    Singular,
    #[error("near-zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("derivative vanished at iteration {iteration}")]
    ZeroDerivative { iteration: usize },
    #[error("one-sided limits disagree (left {left}, right {right})")]
    NoLimit { left: f64, right: f64 },
    #[error("target vertex is unreachable")]
    NoPath,
    #[error("graph has a vertex of odd degree")]
    OddDegree,
    #[error("graph edges do not form a single connected component")]
    Disconnected,
    #[error("graph has no Hamiltonian path from the start vertex")]
    NoHamiltonianPath,
    #[error("eigenvalues are complex")]
    ComplexEigenvalues,
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Coarse classification of an [`NError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally invalid input, rejected before any work is done.
    InvalidArgument,
    /// Valid input that is numerically or combinatorially degenerate.
    Unsolvable,
    /// Input outside the range the algorithm was built for.
    Unsupported,
}

impl NError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NError::InvalidArgument(_)
            | NError::DimensionMismatch { .. }
            | NError::NotSquare { .. }
            | NError::EmptyInput(_)
            | NError::SameSignBracket { .. } => ErrorKind::InvalidArgument,
            NError::Singular
            | NError::ZeroPivot(_)
            | NError::ZeroDerivative { .. }
            | NError::NoLimit { .. }
            | NError::NoPath
            | NError::OddDegree
            | NError::Disconnected
            | NError::NoHamiltonianPath => ErrorKind::Unsolvable,
            NError::ComplexEigenvalues | NError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

pub type Result<T> = std::result::Result<T, NError>;

/// Fails with `DimensionMismatch` unless both lengths agree.
pub(crate) fn check_same_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(NError::DimensionMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(NError::NotSquare { rows: 2, cols: 3 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(NError::SameSignBracket { fa: 1.0, fb: 2.0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(NError::ZeroPivot(1).kind(), ErrorKind::Unsolvable);
        assert_eq!(NError::OddDegree.kind(), ErrorKind::Unsolvable);
        assert_eq!(NError::ComplexEigenvalues.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn messages_name_the_problem() {
        let e = NError::DimensionMismatch { expected: 3, found: 2 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 2");
        assert_eq!(NError::ZeroPivot(4).to_string(), "near-zero pivot at row 4");
    }
}
