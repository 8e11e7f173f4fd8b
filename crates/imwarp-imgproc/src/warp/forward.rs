use imwarp_image::{Image, ImageError};
use imwarp_linalg::{matrix::transform_point, Mat3};

/// Warp an image by pushing every source pixel to its transformed position.
///
/// The destination is cleared to zero first. Each source pixel (`x` = column,
/// `y` = row) is mapped through `m`, normalized by its homogeneous coordinate and
/// rounded half to even. Its channel vector is copied there when the position lies
/// inside `dst`; otherwise it is discarded.
///
/// Pixels are visited in row-major order, so when several source pixels land on the
/// same destination pixel the last one wins. Destination pixels that receive no
/// source pixel stay zero.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst.
///
/// # Example
///
/// ```
/// use imwarp_image::{Image, ImageSize};
/// use imwarp_imgproc::warp::warp_forward;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let src = Image::<f32, 1>::new(size, vec![1.0, 2.0, 3.0]).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 9.0).unwrap();
///
/// // shift one column to the right
/// let m = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
/// warp_forward(&src, &mut dst, &m).unwrap();
/// assert_eq!(dst.as_slice(), &[0.0, 1.0, 2.0]);
/// ```
pub fn warp_forward<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Mat3,
) -> Result<(), ImageError> {
    dst.fill(0.0);

    let (dst_rows, dst_cols) = (dst.rows() as f64, dst.cols() as f64);
    let mut discarded = 0usize;

    for row in 0..src.rows() {
        for col in 0..src.cols() {
            let target = transform_point(m, col as f64, row as f64)
                .map(|(u, v)| (u.round_ties_even(), v.round_ties_even()))
                .filter(|&(u, v)| u >= 0.0 && u < dst_cols && v >= 0.0 && v < dst_rows);

            let Some((u, v)) = target else {
                discarded += 1;
                continue;
            };

            if let (Some(src_pixel), Some(dst_pixel)) =
                (src.pixel(row, col), dst.pixel_mut(v as usize, u as usize))
            {
                dst_pixel.copy_from_slice(src_pixel);
            }
        }
    }

    log::debug!(
        "forward warp discarded {} of {} source pixels",
        discarded,
        src.rows() * src.cols()
    );

    Ok(())
}
