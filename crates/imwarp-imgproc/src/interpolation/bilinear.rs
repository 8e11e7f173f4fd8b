use imwarp_image::Image;

use super::nearest::gather_pixel;

/// Kernel for bilinear interpolation
///
/// The four neighbors of (`x`, `y`) are taken at the floor and ceil of each
/// coordinate and blended first along `y` and then along `x`:
///
/// ```text
/// f12 = (1 - alpha) * f(x0, y0) + alpha * f(x0, y1)
/// f34 = (1 - alpha) * f(x1, y0) + alpha * f(x1, y1)
/// out = (1 - beta) * f12 + beta * f34
/// ```
///
/// with `alpha = frac(y)` and `beta = frac(x)`. A neighbor outside the image
/// contributes a zero vector.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x` - The x coordinate (column) of the pixel to interpolate.
/// * `y` - The y coordinate (row) of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn bilinear_interpolation<const C: usize>(image: &Image<f32, C>, x: f64, y: f64) -> [f32; C] {
    let (x0, x1) = (x.floor(), x.ceil());
    let (y0, y1) = (y.floor(), y.ceil());

    let alpha = y - y0;
    let beta = x - x0;

    let sample = |u: f64, v: f64, k: usize| -> f64 {
        gather_pixel(image, u, v).map_or(0.0, |px| px[k] as f64)
    };

    let mut pixel = [0.0; C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let f12 = (1.0 - alpha) * sample(x0, y0, k) + alpha * sample(x0, y1, k);
        let f34 = (1.0 - alpha) * sample(x1, y0, k) + alpha * sample(x1, y1, k);
        *out = ((1.0 - beta) * f12 + beta * f34) as f32;
    }

    pixel
}
