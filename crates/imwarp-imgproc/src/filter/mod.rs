//! 2D convolution of images with dense kernels.
//!
//! Three strategies are provided and differ only in how the image border is treated:
//!
//! - [`convolve_direct`]: sliding window over the interior, border band left as a
//!   placeholder.
//! - [`convolve_clamped`]: sliding window over every pixel, out-of-range taps read the
//!   nearest border pixel.
//! - [`convolve_frequency`]: spectral product for the interior, clamped convolution for
//!   the border band.

mod border;
mod convolution;
mod fft;

/// Kernel type and kernel builders.
pub mod kernels;

pub use border::BorderMode;
pub use convolution::{convolve_clamped, convolve_direct, BORDER_PLACEHOLDER};
pub use fft::convolve_frequency;

use imwarp_image::{Image, ImageError};
use kernels::Kernel;

/// Convolution strategy used by [`filter2d`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolutionMethod {
    /// Interior-only convolution, see [`convolve_direct`].
    Direct,
    /// Convolution with nearest-border replication, see [`convolve_clamped`].
    #[default]
    Clamped,
    /// Frequency-domain convolution, see [`convolve_frequency`].
    Frequency,
}

/// Convolve an image with a kernel using the given method.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
/// * `method` - The convolution strategy.
///
/// # Example
///
/// ```
/// use imwarp_image::{Image, ImageSize};
/// use imwarp_imgproc::filter::{filter2d, kernels, ConvolutionMethod};
///
/// let size = ImageSize { width: 5, height: 5 };
/// let src = Image::<f32, 1>::from_size_fn(size, |r, c, _| (r + c) as f32).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// let kernel = kernels::identity(3, 3).unwrap();
/// filter2d(&src, &mut dst, &kernel, ConvolutionMethod::Clamped).unwrap();
/// assert_eq!(dst, src);
/// ```
pub fn filter2d<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
    method: ConvolutionMethod,
) -> Result<(), ImageError> {
    match method {
        ConvolutionMethod::Direct => convolve_direct(src, dst, kernel),
        ConvolutionMethod::Clamped => convolve_clamped(src, dst, kernel),
        ConvolutionMethod::Frequency => convolve_frequency(src, dst, kernel),
    }
}
