use crate::linalg;

/// Converts Euclidean points to homogeneous coordinates.
///
/// Appends a literal `1.0` as the third coordinate of each point. A single
/// point is handled as a one element slice.
///
/// # Arguments
///
/// * `points` - The Euclidean points with shape (N, 2).
///
/// # Returns
///
/// The points in homogeneous coordinates with shape (N, 3).
///
/// Example:
///
/// ```
/// use planar_transform::ops::make_homogeneous;
///
/// let points = make_homogeneous(&[[2.0, 3.0]]);
/// assert_eq!(points, vec![[2.0, 3.0, 1.0]]);
/// ```
pub fn make_homogeneous(points: &[[f64; 2]]) -> Vec<[f64; 3]> {
    points.iter().map(|p| [p[0], p[1], 1.0]).collect()
}

/// Converts homogeneous points back to Euclidean coordinates.
///
/// Drops the third coordinate unchanged. This is not a projective
/// normalization: the third coordinate is assumed to be exactly 1, which
/// holds for every affine-transformed point produced by this crate.
///
/// # Arguments
///
/// * `points` - The homogeneous points with shape (N, 3).
///
/// # Returns
///
/// The Euclidean points with shape (N, 2).
pub fn make_euclidean(points: &[[f64; 3]]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p[0], p[1]]).collect()
}

/// Transforms a set of points with a 3x3 transformation matrix.
///
/// Each point is treated as a homogeneous column vector and left-multiplied
/// by `m`.
///
/// # Arguments
///
/// * `m` - The 3x3 transformation matrix.
/// * `points` - The Euclidean points with shape (N, 2).
///
/// # Returns
///
/// The transformed Euclidean points with shape (N, 2).
///
/// Example:
///
/// ```
/// use planar_transform::ops::transform_points;
/// use planar_transform::transforms::translating;
///
/// let dst = transform_points(&translating(1.0, 2.0), &[[0.0, 0.0]]);
/// assert_eq!(dst, vec![[1.0, 2.0]]);
/// ```
pub fn transform_points(m: &[[f64; 3]; 3], points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let points_h = make_homogeneous(points);

    let mut transformed = Vec::with_capacity(points_h.len());
    for p in &points_h {
        let mut dst = [0.0; 3];
        linalg::mat33_mul_vec3(m, p, &mut dst);
        transformed.push(dst);
    }

    make_euclidean(&transformed)
}
