use imwarp_image::Image;

// Converts an integral-valued coordinate into an index, rejecting anything
// outside [0, len). NaN fails both comparisons.
fn checked_index(v: f64, len: usize) -> Option<usize> {
    (v >= 0.0 && v < len as f64).then_some(v as usize)
}

/// Fetch the pixel at the integral position (`x`, `y`), where `x` is the column
/// and `y` the row.
///
/// Returns `None` when the position is outside the image.
pub(crate) fn gather_pixel<const C: usize>(image: &Image<f32, C>, x: f64, y: f64) -> Option<&[f32]> {
    let col = checked_index(x, image.cols())?;
    let row = checked_index(y, image.rows())?;
    image.pixel(row, col)
}

/// Kernel for nearest neighbor interpolation
///
/// The coordinates are rounded half to even before sampling.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate (column) of the pixel to interpolate.
/// * `v` - The y coordinate (row) of the pixel to interpolate.
///
/// # Returns
///
/// The pixel values, or `None` if the rounded position lies outside the image.
pub fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f64,
    v: f64,
) -> Option<&[f32]> {
    gather_pixel(image, u.round_ties_even(), v.round_ties_even())
}

/// Nearest neighbor lookup that truncates the coordinates toward zero instead of rounding.
///
/// # Returns
///
/// The pixel values, or `None` if the truncated position lies outside the image.
pub fn truncated_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f64,
    v: f64,
) -> Option<&[f32]> {
    gather_pixel(image, u.trunc(), v.trunc())
}
