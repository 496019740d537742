use planar_image::{Image, ImageError};
use planar_transform::transforms;

use crate::interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode};
use crate::parallel;

fn transform_point(x: f64, y: f64, m: &[[f64; 3]; 3]) -> (f64, f64) {
    let w = m[2][0] * x + m[2][1] * y + m[2][2];
    let u = (m[0][0] * x + m[0][1] * y + m[0][2]) / w;
    let v = (m[1][0] * x + m[1][1] * y + m[1][2]) / w;
    (u, v)
}

/// Applies a perspective transformation to an image.
///
/// The destination canvas keeps the size the caller allocated; destination
/// pixels whose source position falls outside the input keep their initial
/// value.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 transformation matrix from src to dst.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::CannotComputeDeterminant`] when `m` is not
/// invertible.
///
/// # Example
///
/// ```
/// use planar_image::{Image, ImageSize};
/// use planar_imgproc::interpolation::InterpolationMode;
/// use planar_imgproc::warp::warp_perspective;
///
/// let src = Image::<f32, 1>::new(
///   ImageSize {
///     width: 4,
///     height: 5,
///   },
///   vec![0.0f32; 4 * 5],
/// ).unwrap();
///
/// let m = [[1.0, 0.0, -1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]];
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///   ImageSize {
///     width: 4,
///     height: 5,
///   },
///   0.0,
/// ).unwrap();
///
/// warp_perspective(&src, &mut dst, &m, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_perspective<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &[[f64; 3]; 3],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // invert the matrix to find corresponding positions in src from dst
    let m_inv = transforms::invert(m).map_err(|_| ImageError::CannotComputeDeterminant)?;

    // a zero-width or zero-height canvas has no pixels to resample
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    let (dst_cols, dst_rows) = (dst.cols(), dst.rows());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        let (u_src, v_src) = transform_point(x as f64, y as f64, &m_inv);
        Ok((u_src as f32, v_src as f32))
    })?;

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        // check if the position is within the bounds of the src image
        if x >= 0.0f32 && x < src.cols() as f32 && y >= 0.0f32 && y < src.rows() as f32 {
            dst_pixel
                .iter_mut()
                .enumerate()
                .for_each(|(k, pixel)| *pixel = interpolate_pixel(src, x, y, k, interpolation));
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use planar_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_transform_point_translation() {
        let m = [[1.0, 0.0, -1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]];
        let (x, y) = super::transform_point(1.0, 1.0, &m);
        assert_eq!((x, y), (0.0, 2.0));
    }

    #[test]
    fn test_warp_perspective_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_transformed = Image::<f32, 3>::from_size_val(new_size, 0.0)?;

        super::warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            super::InterpolationMode::Bilinear,
        )?;

        assert_eq!(image_transformed.num_channels(), 3);
        assert_eq!(image_transformed.size().width, 2);
        assert_eq!(image_transformed.size().height, 3);

        Ok(())
    }

    #[test]
    fn test_warp_perspective_identity() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            (0..20).map(|x| x as f32).collect(),
        )?;

        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let mut image_transformed = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            super::InterpolationMode::Nearest,
        )?;

        assert_eq!(image_transformed.as_slice(), image.as_slice());
        assert_eq!(image_transformed.size(), image.size());

        Ok(())
    }

    #[test]
    fn test_warp_perspective_hflip() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;

        let image_expected = [1.0, 0.0, 3.0, 2.0, 5.0, 4.0];

        // flip matrix
        let m = [[-1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let mut image_transformed = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            super::InterpolationMode::Bilinear,
        )?;

        assert_eq!(image_transformed.as_slice(), image_expected);

        Ok(())
    }

    #[test]
    fn test_warp_perspective_shift() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            vec![
                0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
                15.0,
            ],
        )?;

        // shift left by 1 pixel
        let m = [[1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let image_expected = [
            1.0f32, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 0.0, 9.0, 10.0, 11.0, 0.0, 13.0, 14.0, 15.0, 0.0,
        ];

        let mut image_transformed = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            super::InterpolationMode::Bilinear,
        )?;

        assert_eq!(image_transformed.as_slice(), image_expected);

        Ok(())
    }

    #[test]
    fn test_warp_perspective_empty_destination() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0f32, 1.0, 2.0, 3.0],
        )?;

        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let mut zero_width = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 0,
                height: 3,
            },
            0.0,
        )?;
        super::warp_perspective(&image, &mut zero_width, &m, super::InterpolationMode::Nearest)?;
        assert!(zero_width.as_slice().is_empty());

        let mut zero_height = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 0,
            },
            0.0,
        )?;
        super::warp_perspective(
            &image,
            &mut zero_height,
            &m,
            super::InterpolationMode::Bilinear,
        )?;
        assert!(zero_height.as_slice().is_empty());

        Ok(())
    }

    #[test]
    fn test_warp_perspective_singular_matrix() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut dst = image.clone();

        // rank deficient matrix
        let m = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

        let res = super::warp_perspective(&image, &mut dst, &m, super::InterpolationMode::Nearest);
        assert_eq!(res, Err(ImageError::CannotComputeDeterminant));

        Ok(())
    }
}
