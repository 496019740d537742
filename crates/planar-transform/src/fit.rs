use faer::prelude::SpSolver;

use crate::error::TransformError;
use crate::linalg;

/// Recovers the affine transformation mapping three source points to three
/// target points.
///
/// The six affine parameters `[a1, a2, tx, a3, a4, ty]` are the solution of
/// the 6x6 linear system where each correspondence contributes the rows
/// `[x_i, y_i, 1, 0, 0, 0] -> x_target_i` and
/// `[0, 0, 0, x_i, y_i, 1] -> y_target_i`.
///
/// This is the exact inverse of applying a known affine matrix to a
/// non-degenerate triangle: fitting the transformed points recovers the
/// original matrix.
///
/// # Arguments
///
/// * `src` - The source points with shape (3, 2).
/// * `dst` - The target points with shape (3, 2).
///
/// # Returns
///
/// The 3x3 affine transformation matrix with bottom row `[0, 0, 1]`.
///
/// # Errors
///
/// Returns [`TransformError::NonInvertible`] when the source points are
/// collinear and the system is singular.
///
/// Example:
///
/// ```
/// use planar_transform::fit::learn_affine;
///
/// let src = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
/// let dst = [[2.0, 1.0], [3.0, 1.0], [2.0, 2.0]];
/// let m = learn_affine(&src, &dst).unwrap();
/// assert!((m[0][2] - 2.0).abs() < 1e-12);
/// assert!((m[1][2] - 1.0).abs() < 1e-12);
/// ```
pub fn learn_affine(
    src: &[[f64; 2]; 3],
    dst: &[[f64; 2]; 3],
) -> Result<[[f64; 3]; 3], TransformError> {
    // the 6x6 system determinant is the square of this 3x3 determinant, so
    // collinear source points are exactly the singular case
    let det = linalg::det_mat33(&[
        [src[0][0], src[0][1], 1.0],
        [src[1][0], src[1][1], 1.0],
        [src[2][0], src[2][1], 1.0],
    ]);
    if det == 0.0 {
        return Err(TransformError::NonInvertible);
    }

    // construct matrix M and right hand side b, two rows per correspondence
    let mut mat_m = faer::Mat::<f64>::zeros(6, 6);
    let mut mat_b = faer::Mat::<f64>::zeros(6, 1);
    for i in 0..3 {
        let (x, y) = (src[i][0], src[i][1]);
        unsafe {
            mat_m.write_unchecked(2 * i, 0, x);
            mat_m.write_unchecked(2 * i, 1, y);
            mat_m.write_unchecked(2 * i, 2, 1.0);
            mat_m.write_unchecked(2 * i + 1, 3, x);
            mat_m.write_unchecked(2 * i + 1, 4, y);
            mat_m.write_unchecked(2 * i + 1, 5, 1.0);
            mat_b.write_unchecked(2 * i, 0, dst[i][0]);
            mat_b.write_unchecked(2 * i + 1, 0, dst[i][1]);
        }
    }

    // solve -> p: [a1, a2, tx, a3, a4, ty]
    let params = mat_m.partial_piv_lu().solve(mat_b);
    let p = params.col(0);

    Ok([[p[0], p[1], p[2]], [p[3], p[4], p[5]], [0.0, 0.0, 1.0]])
}
