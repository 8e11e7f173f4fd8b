use imwarp_image::{Image, ImageError, ImageSize};

use super::CameraIntrinsic;
use crate::interpolation::grid::{meshgrid_from_fn, CoordinateMap};
use crate::interpolation::truncated_neighbor_interpolation;
use crate::parallel;

/// Represents the radial distortion parameters of a camera
///
/// The radial scale at normalized radius `r` is `1 + k1 * r^2 + k2 * r^4 + k3 * r^6`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialDistortion {
    /// The first radial distortion coefficient
    pub k1: f64,
    /// The second radial distortion coefficient
    pub k2: f64,
    /// The third radial distortion coefficient
    pub k3: f64,
}

/// Distort a point using radial distortion
///
/// # Arguments
///
/// * `x` - The x coordinate (column) of the point
/// * `y` - The y coordinate (row) of the point
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
///
/// # Returns
///
/// * `x` - The x coordinate of the distorted point
/// * `y` - The y coordinate of the distorted point
pub fn distort_point(
    x: f64,
    y: f64,
    intrinsic: &CameraIntrinsic,
    distortion: &RadialDistortion,
) -> (f64, f64) {
    let (fx, fy, cx, cy) = (intrinsic.fx, intrinsic.fy, intrinsic.cx, intrinsic.cy);
    let (k1, k2, k3) = (distortion.k1, distortion.k2, distortion.k3);

    // normalize the coordinates
    let xn = (x - cx) / fx;
    let yn = (y - cy) / fy;

    // radial distortion
    let r2 = xn * xn + yn * yn;
    let kr = 1.0 + k1 * r2 + k2 * r2 * r2 + k3 * r2 * r2 * r2;

    // denormalize as a displacement so that kr == 1 maps every point onto itself
    (x + (x - cx) * (kr - 1.0), y + (y - cy) * (kr - 1.0))
}

/// Generate the undistortion map for a radial distortion model
///
/// Every pixel of the map holds the position in the distorted image that the
/// undistorted pixel reads from.
///
/// # Arguments
///
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
/// * `size` - The size of the undistorted image
pub fn generate_correction_map(
    intrinsic: &CameraIntrinsic,
    distortion: &RadialDistortion,
    size: ImageSize,
) -> CoordinateMap {
    meshgrid_from_fn(size.width, size.height, |x, y| {
        distort_point(x as f64, y as f64, intrinsic, distortion)
    })
}

fn check_camera(intrinsic: &CameraIntrinsic) {
    if intrinsic.fx == 0.0 || intrinsic.fy == 0.0 {
        log::warn!(
            "degenerate focal length ({}, {}): every pixel will be left empty",
            intrinsic.fx,
            intrinsic.fy
        );
    }
}

fn sample_into<const C: usize>(src: &Image<f32, C>, x: f64, y: f64, dst_pixel: &mut [f32]) {
    match truncated_neighbor_interpolation(src, x, y) {
        Some(pixel) => dst_pixel.copy_from_slice(pixel),
        None => dst_pixel.fill(0.0),
    }
}

/// Correct the radial lens distortion of an image.
///
/// For every pixel (`v` = row, `u` = column) of `dst` the distorted position
/// `(u', v')` is computed with [`distort_point`] and `src` is sampled there after
/// truncating both coordinates toward zero. Pixels that read outside `src` are set
/// to zero.
///
/// Applying the forward distortion as the lookup is an approximation of the true
/// inverse that holds for small coefficients.
///
/// # Arguments
///
/// * `src` - The distorted image with shape (height, width, channels).
/// * `dst` - The undistorted image with shape (height, width, channels).
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
///
/// # Example
///
/// ```
/// use imwarp_image::{Image, ImageSize};
/// use imwarp_imgproc::calibration::{distortion::{undistort_image, RadialDistortion}, CameraIntrinsic};
///
/// let size = ImageSize { width: 4, height: 3 };
/// let src = Image::<f32, 1>::from_size_fn(size, |r, c, _| (r * 4 + c) as f32).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// let intrinsic = CameraIntrinsic { fx: 2.0, fy: 2.0, cx: 2.0, cy: 1.5 };
/// undistort_image(&src, &mut dst, &intrinsic, &RadialDistortion::default()).unwrap();
/// assert_eq!(dst, src);
/// ```
pub fn undistort_image<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    intrinsic: &CameraIntrinsic,
    distortion: &RadialDistortion,
) -> Result<(), ImageError> {
    check_camera(intrinsic);

    parallel::par_iter_rows_indexed(dst, |v, u, dst_pixel| {
        let (x, y) = distort_point(u as f64, v as f64, intrinsic, distortion);
        sample_into(src, x, y, dst_pixel);
    });

    Ok(())
}

/// Correct the radial lens distortion of an image through a precomputed map.
///
/// Produces the same output as [`undistort_image`], bit for bit, by building the
/// whole coordinate map with [`generate_correction_map`] first and resampling from
/// it.
///
/// # Arguments
///
/// * `src` - The distorted image with shape (height, width, channels).
/// * `dst` - The undistorted image with shape (height, width, channels).
/// * `intrinsic` - The intrinsic parameters of the camera
/// * `distortion` - The distortion parameters of the camera
pub fn undistort_image_vectorized<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    intrinsic: &CameraIntrinsic,
    distortion: &RadialDistortion,
) -> Result<(), ImageError> {
    check_camera(intrinsic);

    let map = generate_correction_map(intrinsic, distortion, dst.size());
    log::debug!("undistortion map of size {}", map.size);

    parallel::par_iter_rows_resample(dst, &map, |x, y, dst_pixel| {
        sample_into(src, x, y, dst_pixel);
    });

    Ok(())
}
