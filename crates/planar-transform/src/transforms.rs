use crate::error::TransformError;
use crate::linalg;

/// Returns the 3x3 identity transformation matrix.
///
/// Example:
///
/// ```
/// use planar_transform::transforms::identity;
///
/// let eye = identity();
/// assert_eq!(eye[0], [1.0, 0.0, 0.0]);
/// ```
pub fn identity() -> [[f64; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Returns a 3x3 scaling matrix `diag(scale_x, scale_y, 1)`.
///
/// `scaling(1.0, 1.0)` is the identity transform.
///
/// # Arguments
///
/// * `scale_x` - The scale factor along the x axis.
/// * `scale_y` - The scale factor along the y axis.
pub fn scaling(scale_x: f64, scale_y: f64) -> [[f64; 3]; 3] {
    [[scale_x, 0.0, 0.0], [0.0, scale_y, 0.0], [0.0, 0.0, 1.0]]
}

/// Returns a 3x3 rotation matrix about the origin.
///
/// Positive angles rotate clockwise, negative angles counter-clockwise.
/// `rotating(0.0)` is the identity transform.
///
/// The matrix follows the convention:
///
/// | cos(θ)  sin(θ)  0 |
/// | -sin(θ) cos(θ)  0 |
/// | 0       0       1 |
///
/// # Arguments
///
/// * `theta_degrees` - The angle of rotation in degrees.
pub fn rotating(theta_degrees: f64) -> [[f64; 3]; 3] {
    let theta = theta_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    [[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

/// Returns a 3x3 translation matrix shifting by `(tx, ty)`.
///
/// `translating(0.0, 0.0)` is the identity transform.
///
/// # Arguments
///
/// * `tx` - The shift along the x axis.
/// * `ty` - The shift along the y axis.
pub fn translating(tx: f64, ty: f64) -> [[f64; 3]; 3] {
    [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]]
}

/// Combines transformation matrices in application order.
///
/// The first matrix in the slice is applied first to a column point, so the
/// result is the right-to-left product `m[n-1] * ... * m[1] * m[0]`.
///
/// # Arguments
///
/// * `transformations` - The ordered transformation matrices, at least one.
///
/// # Errors
///
/// Returns [`TransformError::EmptyComposition`] if the slice is empty.
///
/// Example:
///
/// ```
/// use planar_transform::transforms::{combine, rotating, translating};
///
/// // rotate first, then shift
/// let m = combine(&[rotating(90.0), translating(10.0, 0.0)]).unwrap();
/// assert_eq!(m[0][2], 10.0);
/// ```
pub fn combine(transformations: &[[[f64; 3]; 3]]) -> Result<[[f64; 3]; 3], TransformError> {
    let (first_applied, rest) = transformations
        .split_first()
        .ok_or(TransformError::EmptyComposition)?;

    let mut combined = *first_applied;
    for m in rest {
        let mut dst = [[0.0; 3]; 3];
        linalg::mat33_mul_mat33(m, &combined, &mut dst);
        combined = dst;
    }

    Ok(combined)
}

/// Inverts a 3x3 transformation matrix.
///
/// # Arguments
///
/// * `m` - The 3x3 matrix to invert.
///
/// # Errors
///
/// Returns [`TransformError::NonInvertible`] when the determinant is zero.
/// Follows the OpenCV convention of checking for determinant == 0 exactly.
pub fn invert(m: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3], TransformError> {
    let det = linalg::det_mat33(m);
    if det == 0.0 {
        return Err(TransformError::NonInvertible);
    }

    let adj = linalg::adjugate_mat33(m);

    let mut inv = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            inv[i][j] = adj[i][j] / det;
        }
    }

    Ok(inv)
}
