use imwarp_image::{Image, ImageError};

use super::border::BorderMode;
use super::kernels::Kernel;
use crate::parallel;

/// Value written by [`convolve_direct`] to pixels whose kernel window leaves the image.
pub const BORDER_PLACEHOLDER: f32 = 1.0;

pub(crate) fn check_same_size<const C: usize>(
    src: &Image<f32, C>,
    dst: &Image<f32, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Correlate the pixel at (`row`, `col`) with an already flipped kernel and write the
/// channel sums to `out`.
///
/// Taps are accumulated in kernel row-major order so every caller gets the same bits.
pub(crate) fn convolve_pixel<const C: usize>(
    src: &Image<f32, C>,
    flipped: &Kernel,
    row: usize,
    col: usize,
    border: BorderMode,
    out: &mut [f32],
) {
    let (travel_h, travel_w) = flipped.travel();
    let mut acc = [0.0f32; C];

    for x in 0..flipped.height() {
        let r = (row + x) as isize - travel_h as isize;
        for y in 0..flipped.width() {
            let c = (col + y) as isize - travel_w as isize;
            let Some((sr, sc)) = border.resolve(r, c, src.rows(), src.cols()) else {
                continue;
            };
            let Some(pixel) = src.pixel(sr, sc) else {
                continue;
            };
            let weight = flipped.get(x, y);
            acc.iter_mut()
                .zip(pixel.iter())
                .for_each(|(a, &v)| *a += v * weight);
        }
    }

    out.copy_from_slice(&acc);
}

/// Convolve an image with a kernel, skipping pixels whose window leaves the image.
///
/// Pixels at least `travel` away from every edge receive the full convolution sum;
/// the remaining border band is set to [`BORDER_PLACEHOLDER`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel. It is flipped before the sliding window pass.
///
/// # Errors
///
/// Fails if `src` and `dst` do not have the same size.
///
/// # Example
///
/// ```
/// use imwarp_image::{Image, ImageSize};
/// use imwarp_imgproc::filter::{convolve_direct, kernels};
///
/// let size = ImageSize { width: 4, height: 4 };
/// let src = Image::<f32, 1>::from_size_val(size, 2.0).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// convolve_direct(&src, &mut dst, &kernels::box_blur(3, 3).unwrap()).unwrap();
/// assert_eq!(dst.pixel(0, 0), Some(&[1.0][..]));
/// assert!((dst.pixel(1, 1).unwrap()[0] - 2.0).abs() < 1e-6);
/// ```
pub fn convolve_direct<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let flipped = kernel.flipped();
    let (travel_h, travel_w) = flipped.travel();
    let (rows, cols) = (src.rows(), src.cols());

    if rows <= 2 * travel_h || cols <= 2 * travel_w {
        log::warn!(
            "kernel {}x{} leaves no interior in a {}x{} image",
            kernel.height(),
            kernel.width(),
            rows,
            cols
        );
    }

    parallel::par_iter_rows_indexed(dst, |row, col, dst_pixel| {
        let inside = row >= travel_h
            && row + travel_h < rows
            && col >= travel_w
            && col + travel_w < cols;
        if inside {
            convolve_pixel(src, &flipped, row, col, BorderMode::Constant, dst_pixel);
        } else {
            dst_pixel.fill(BORDER_PLACEHOLDER);
        }
    });

    Ok(())
}

/// Convolve an image with a kernel, replicating the nearest border pixel for taps
/// that leave the image.
///
/// Every pixel of `dst` receives a full convolution sum.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
///
/// # Errors
///
/// Fails if `src` and `dst` do not have the same size.
pub fn convolve_clamped<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let flipped = kernel.flipped();

    parallel::par_iter_rows_indexed(dst, |row, col, dst_pixel| {
        convolve_pixel(src, &flipped, row, col, BorderMode::Replicate, dst_pixel);
    });

    Ok(())
}
