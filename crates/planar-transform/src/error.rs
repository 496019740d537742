/// An error type for the transform module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// Error when a matrix has zero determinant and cannot be inverted.
    #[error("Matrix is not invertible (zero determinant)")]
    NonInvertible,

    /// Error when a composition is requested with no matrices.
    #[error("Composition requires at least one matrix")]
    EmptyComposition,
}
