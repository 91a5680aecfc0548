//! Core vector-space traits for numerix.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x. Callers check shapes first.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V: ?Sized> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Compute dot(x, y) over the common prefix of `x` and `y`.
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}
