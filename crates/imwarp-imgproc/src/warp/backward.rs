use imwarp_image::{Image, ImageError};
use imwarp_linalg::{matrix::transform_point, Mat3};

use super::inverse_transform;
use crate::interpolation::{grid::meshgrid_from_fn, remap, InterpolationMode};

// Marks a destination pixel whose source coordinate could not be computed.
const NO_SAMPLE: (f64, f64) = (f64::NAN, f64::NAN);

/// Warp an image by pulling the nearest source pixel for every destination pixel.
///
/// The transform is inverted once. Each destination pixel (`x` = column, `y` = row)
/// is mapped through the inverse, rounded half to even and sampled from `src`.
/// Destination pixels that map outside `src` are set to zero.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst.
///
/// # Errors
///
/// Returns [`ImageError::CannotComputeDeterminant`] if `m` is not invertible.
///
/// # Example
///
/// ```
/// use imwarp_image::{Image, ImageSize};
/// use imwarp_imgproc::warp::warp_backward_nearest;
///
/// let size = ImageSize { width: 2, height: 3 };
/// let src = Image::<f32, 1>::new(size, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// // horizontal flip
/// let m = [-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
/// warp_backward_nearest(&src, &mut dst, &m).unwrap();
/// assert_eq!(dst.as_slice(), &[1.0, 0.0, 3.0, 2.0, 5.0, 4.0]);
/// ```
pub fn warp_backward_nearest<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Mat3,
) -> Result<(), ImageError> {
    let m_inv = inverse_transform(m)?;

    let map = meshgrid_from_fn(dst.cols(), dst.rows(), |x, y| {
        transform_point(&m_inv, x as f64, y as f64).unwrap_or(NO_SAMPLE)
    });

    remap(src, dst, &map, InterpolationMode::Nearest)
}

/// Warp an image by bilinearly interpolating a source sample for every destination pixel.
///
/// The transform is inverted once. Unlike [`warp_backward_nearest`], the destination
/// pixel is lifted as `[row, col, 1]`, so the first normalized coordinate of the
/// result is the source row and the second the source column. The sample is blended
/// from the floor/ceil neighbors as described in
/// [`bilinear_interpolation`](crate::interpolation::bilinear_interpolation).
///
/// A destination pixel is set to zero when its source coordinate cannot be computed
/// or either source coordinate is negative.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst acting on `[row, col, 1]`.
///
/// # Errors
///
/// Returns [`ImageError::CannotComputeDeterminant`] if `m` is not invertible.
pub fn warp_backward_bilinear<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Mat3,
) -> Result<(), ImageError> {
    let m_inv = inverse_transform(m)?;

    let map = meshgrid_from_fn(dst.cols(), dst.rows(), |col, row| {
        match transform_point(&m_inv, row as f64, col as f64) {
            Some((y, x)) => (x, y),
            None => NO_SAMPLE,
        }
    });

    remap(src, dst, &map, InterpolationMode::Bilinear)
}

/// Warp an image by backward mapping with the given interpolation mode.
///
/// Dispatches to [`warp_backward_nearest`] or [`warp_backward_bilinear`]; see those
/// for the coordinate convention each one uses.
pub fn warp_backward<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Mat3,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    match interpolation {
        InterpolationMode::Nearest => warp_backward_nearest(src, dst, m),
        InterpolationMode::Bilinear => warp_backward_bilinear(src, dst, m),
    }
}
