use imwarp_image::ImageError;

/// A dense 2D convolution kernel.
///
/// The weights are stored in row-major order. Kernels are expected to have odd
/// height and width so that a unique center exists; this is not enforced.
/// Normalization is the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel from its weights in row-major order.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or `data` does not hold `height * width` weights.
    ///
    /// # Example
    ///
    /// ```
    /// use imwarp_imgproc::filter::kernels::Kernel;
    ///
    /// let kernel = Kernel::new(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(kernel.travel(), (0, 1));
    /// ```
    pub fn new(height: usize, width: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if height == 0 || width == 0 {
            return Err(ImageError::EmptyKernel(height, width));
        }

        if data.len() != height * width {
            return Err(ImageError::InvalidKernelShape(data.len(), height * width));
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Create a kernel by evaluating `f(row, col)` for every weight.
    pub fn from_fn(
        height: usize,
        width: usize,
        f: impl Fn(usize, usize) -> f32,
    ) -> Result<Self, ImageError> {
        let data = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Self::new(height, width, data)
    }

    /// Create a kernel as the outer product of a vertical and a horizontal 1D kernel.
    pub fn from_separable(kernel_y: &[f32], kernel_x: &[f32]) -> Result<Self, ImageError> {
        Self::from_fn(kernel_y.len(), kernel_x.len(), |r, c| kernel_y[r] * kernel_x[c])
    }

    /// The number of rows of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of columns of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The kernel weights in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The weight at (`row`, `col`).
    ///
    /// PRECONDITION: `row < height` and `col < width`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// The kernel half-extents `(travel_h, travel_w)`, i.e. `(height / 2, width / 2)`.
    pub fn travel(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Return the kernel rotated by 180 degrees (flipped along both axes).
    ///
    /// Correlating with the flipped kernel computes a true convolution.
    pub fn flipped(&self) -> Kernel {
        let mut data = self.data.clone();
        data.reverse();
        Kernel {
            height: self.height,
            width: self.width,
            data,
        }
    }
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = kernel_size.saturating_sub(1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Create a kernel with a single one at its center, leaving images unchanged.
pub fn identity(height: usize, width: usize) -> Result<Kernel, ImageError> {
    Kernel::from_fn(height, width, |r, c| {
        if r == height / 2 && c == width / 2 {
            1.0
        } else {
            0.0
        }
    })
}

/// Create a 2D box blur kernel whose weights are all `1 / (height * width)`.
pub fn box_blur(height: usize, width: usize) -> Result<Kernel, ImageError> {
    let weight = 1.0 / (height * width) as f32;
    Kernel::new(height, width, vec![weight; height * width])
}

/// Create a normalized 2D gaussian kernel as the outer product of two 1D gaussians.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel (height, width).
/// * `sigma` - The sigma of the gaussian along (y, x).
pub fn gaussian(kernel_size: (usize, usize), sigma: (f32, f32)) -> Result<Kernel, ImageError> {
    let kernel_y = gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_x = gaussian_kernel_1d(kernel_size.1, sigma.1);
    Kernel::from_separable(&kernel_y, &kernel_x)
}

/// Create the 3x3 sobel kernels for the x and y derivatives.
pub fn sobel() -> Result<(Kernel, Kernel), ImageError> {
    let derivative = [-1.0, 0.0, 1.0];
    let smoothing = [1.0, 2.0, 1.0];
    Ok((
        Kernel::from_separable(&smoothing, &derivative)?,
        Kernel::from_separable(&derivative, &smoothing)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_new_validates_shape() {
        assert_eq!(
            Kernel::new(3, 3, vec![0.0; 8]),
            Err(ImageError::InvalidKernelShape(8, 9))
        );
        assert_eq!(Kernel::new(0, 3, vec![]), Err(ImageError::EmptyKernel(0, 3)));
    }

    #[test]
    fn kernel_flipped() -> Result<(), ImageError> {
        let kernel = Kernel::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let flipped = kernel.flipped();
        assert_eq!(flipped.as_slice(), &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(flipped.get(0, 2), 4.0);
        assert_eq!(flipped.flipped(), kernel);
        Ok(())
    }

    #[test]
    fn kernel_travel() -> Result<(), ImageError> {
        assert_eq!(box_blur(5, 3)?.travel(), (2, 1));
        assert_eq!(identity(1, 1)?.travel(), (0, 0));
        Ok(())
    }

    #[test]
    fn identity_kernel() -> Result<(), ImageError> {
        let kernel = identity(3, 3)?;
        assert_eq!(
            kernel.as_slice(),
            &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_1d() {
        let kernel = gaussian_kernel_1d(5, 0.5);

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        for (i, &k) in kernel.iter().enumerate() {
            assert_eq!(k, expected[i]);
        }
    }

    #[test]
    fn gaussian_2d_is_normalized() -> Result<(), ImageError> {
        let kernel = gaussian((5, 3), (1.0, 0.8))?;
        let sum = kernel.as_slice().iter().sum::<f32>();
        assert!((sum - 1.0).abs() < 1e-5);
        assert_eq!(kernel.get(0, 1), kernel.get(4, 1));
        Ok(())
    }

    #[test]
    fn test_sobel_kernels() -> Result<(), ImageError> {
        let (sobel_x, sobel_y) = sobel()?;
        #[rustfmt::skip]
        assert_eq!(
            sobel_x.as_slice(),
            &[
                -1.0, 0.0, 1.0,
                -2.0, 0.0, 2.0,
                -1.0, 0.0, 1.0,
            ]
        );
        #[rustfmt::skip]
        assert_eq!(
            sobel_y.as_slice(),
            &[
                -1.0, -2.0, -1.0,
                 0.0,  0.0,  0.0,
                 1.0,  2.0,  1.0,
            ]
        );
        Ok(())
    }
}
