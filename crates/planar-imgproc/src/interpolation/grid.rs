use planar_image::ImageError;

/// Create a meshgrid of x and y coordinates from a mapping function.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - The function mapping a grid position `(x, y)` to coordinates
///
/// # Returns
///
/// A tuple of row major maps of shape (rows, cols) containing the x and y
/// coordinates produced by the mapping function.
pub fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> Result<(f32, f32), ImageError>,
) -> Result<(Vec<f32>, Vec<f32>), ImageError> {
    let mut map_x = vec![0.0f32; rows * cols];
    let mut map_y = vec![0.0f32; rows * cols];

    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = f(c, r)?;
            map_x[r * cols + c] = x;
            map_y[r * cols + c] = y;
        }
    }

    Ok((map_x, map_y))
}
