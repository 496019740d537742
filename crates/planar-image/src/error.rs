/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a warp matrix has zero determinant and cannot be inverted.
    #[error("Cannot compute the determinant of the transformation")]
    CannotComputeDeterminant,
}
