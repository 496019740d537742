use rayon::prelude::*;

use planar_image::Image;

/// Apply a function to each pixel for grid sampling, row parallel.
///
/// # Arguments
///
/// * `dst` - The destination image with shape (height, width, C).
/// * `map_x` - The row major map of source x coordinates, one per pixel.
/// * `map_y` - The row major map of source y coordinates, one per pixel.
/// * `f` - The function computing a destination pixel from its mapped coordinates.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(&f32, &f32, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.par_chunks_exact(cols))
        .zip(map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
