/// Compute the determinant of a 3x3 matrix.
///
/// # Arguments
///
/// * `m` - The input 3x3 matrix in row major order.
///
/// # Returns
///
/// The determinant of the matrix.
#[rustfmt::skip]
pub fn det_mat33(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) -
    m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]) +
    m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Compute the adjugate of a 3x3 matrix.
///
/// The inverse of an invertible matrix is its adjugate divided by its determinant.
#[rustfmt::skip]
pub fn adjugate_mat33(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ]
}

/// Multiply two 3x3 matrices.
///
/// # Arguments
///
/// * `lhs` - The left hand side 3x3 matrix.
/// * `rhs` - The right hand side 3x3 matrix.
/// * `dst` - The output 3x3 matrix `lhs * rhs`.
pub fn mat33_mul_mat33(lhs: &[[f64; 3]; 3], rhs: &[[f64; 3]; 3], dst: &mut [[f64; 3]; 3]) {
    for i in 0..3 {
        for j in 0..3 {
            dst[i][j] = lhs[i][0] * rhs[0][j] + lhs[i][1] * rhs[1][j] + lhs[i][2] * rhs[2][j];
        }
    }
}

/// Multiply a 3x3 matrix by a column 3-vector.
///
/// # Arguments
///
/// * `m` - The 3x3 matrix.
/// * `v` - The column vector.
/// * `dst` - The output vector `m * v`.
pub fn mat33_mul_vec3(m: &[[f64; 3]; 3], v: &[f64; 3], dst: &mut [f64; 3]) {
    for (i, row) in m.iter().enumerate() {
        dst[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
}
