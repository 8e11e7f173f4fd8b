use std::sync::Arc;

use rayon::prelude::*;
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use imwarp_image::{Image, ImageError};

use super::border::BorderMode;
use super::convolution::{check_same_size, convolve_pixel};
use super::kernels::Kernel;
use crate::parallel;

/// Forward and inverse plans for a 2D transform of a `rows` x `cols` grid.
struct Fft2d {
    rows: usize,
    cols: usize,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>,
}

impl Fft2d {
    fn new(rows: usize, cols: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            rows,
            cols,
            row_forward: planner.plan_fft_forward(cols),
            row_inverse: planner.plan_fft_inverse(cols),
            col_forward: planner.plan_fft_forward(rows),
            col_inverse: planner.plan_fft_inverse(rows),
        }
    }

    fn forward(&self, data: &mut [Complex<f64>]) {
        self.process(data, &self.row_forward, &self.col_forward);
    }

    /// Inverse transform, normalized by the number of samples.
    fn inverse(&self, data: &mut [Complex<f64>]) {
        self.process(data, &self.row_inverse, &self.col_inverse);
        let norm = 1.0 / (self.rows * self.cols) as f64;
        data.iter_mut().for_each(|v| *v *= norm);
    }

    fn process(
        &self,
        data: &mut [Complex<f64>],
        row_fft: &Arc<dyn Fft<f64>>,
        col_fft: &Arc<dyn Fft<f64>>,
    ) {
        // each chunk of `cols` samples is one row
        row_fft.process(data);
        let mut transposed = transpose(data, self.rows, self.cols);
        col_fft.process(&mut transposed);
        data.copy_from_slice(&transpose(&transposed, self.cols, self.rows));
    }
}

fn transpose(data: &[Complex<f64>], rows: usize, cols: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

/// Zero-pad the kernel to `rows` x `cols`.
///
/// For a size difference `d` along an axis, `(d + 1) / 2` zeros go before the kernel
/// and the rest after it.
fn pad_kernel(kernel: &Kernel, rows: usize, cols: usize) -> Vec<f64> {
    let top = (rows - kernel.height() + 1) / 2;
    let left = (cols - kernel.width() + 1) / 2;

    let mut padded = vec![0.0; rows * cols];
    for r in 0..kernel.height() {
        for c in 0..kernel.width() {
            padded[(top + r) * cols + left + c] = kernel.get(r, c) as f64;
        }
    }
    padded
}

/// Move the zero-frequency sample from the center of the grid to index (0, 0).
fn ifftshift(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let (shift_r, shift_c) = (rows / 2, cols / 2);
    let mut out = Vec::with_capacity(data.len());
    for r in 0..rows {
        let src_row = (r + shift_r) % rows;
        for c in 0..cols {
            out.push(data[src_row * cols + (c + shift_c) % cols]);
        }
    }
    out
}

fn spectrum(fft: &Fft2d, samples: impl Iterator<Item = f64>) -> Vec<Complex<f64>> {
    let mut buffer = samples.map(|v| Complex::new(v, 0.0)).collect::<Vec<_>>();
    fft.forward(&mut buffer);
    buffer
}

/// Returns true when the pixel lies within `travel + 1` pixels of any edge.
#[inline]
fn in_border_strip(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    travel: (usize, usize),
) -> bool {
    let (travel_h, travel_w) = travel;
    row < travel_h + 1
        || row + travel_h + 1 >= rows
        || col < travel_w + 1
        || col + travel_w + 1 >= cols
}

/// Convolve an image with a kernel in the frequency domain.
///
/// Each channel is multiplied with the kernel spectrum and transformed back. The
/// circular result is only valid away from the edges, so the band of width
/// `travel + 1` along every edge is recomputed with the clamped convolution. The band
/// therefore matches [`super::convolve_clamped`] exactly and the interior matches it up
/// to floating-point error.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The convolution kernel.
///
/// # Errors
///
/// Fails if `src` and `dst` do not have the same size or the kernel is larger than
/// the image along any axis.
pub fn convolve_frequency<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let (rows, cols) = (src.rows(), src.cols());
    if kernel.height() > rows || kernel.width() > cols {
        return Err(ImageError::KernelLargerThanImage(
            kernel.width(),
            kernel.height(),
            cols,
            rows,
        ));
    }

    log::debug!(
        "frequency convolution of a {}x{}x{} image with a {}x{} kernel",
        rows,
        cols,
        C,
        kernel.height(),
        kernel.width()
    );

    let fft = Fft2d::new(rows, cols);

    let (kernel_spectrum, channel_spectra) = rayon::join(
        || {
            let padded = pad_kernel(kernel, rows, cols);
            spectrum(&fft, ifftshift(&padded, rows, cols).into_iter())
        },
        || {
            (0..C)
                .into_par_iter()
                .map(|ch| {
                    let samples = src.as_slice().iter().skip(ch).step_by(C);
                    spectrum(&fft, samples.map(|&v| v as f64))
                })
                .collect::<Vec<_>>()
        },
    );

    let filtered = channel_spectra
        .into_par_iter()
        .map(|mut buffer| {
            buffer
                .iter_mut()
                .zip(kernel_spectrum.iter())
                .for_each(|(v, k)| *v *= k);
            fft.inverse(&mut buffer);
            buffer
        })
        .collect::<Vec<_>>();

    let flipped = kernel.flipped();
    let travel = flipped.travel();

    parallel::par_iter_rows_indexed(dst, |row, col, dst_pixel| {
        if in_border_strip(row, col, rows, cols, travel) {
            convolve_pixel(src, &flipped, row, col, BorderMode::Replicate, dst_pixel);
        } else {
            let idx = row * cols + col;
            dst_pixel
                .iter_mut()
                .zip(filtered.iter())
                .for_each(|(d, channel)| *d = channel[idx].re as f32);
        }
    });

    Ok(())
}
