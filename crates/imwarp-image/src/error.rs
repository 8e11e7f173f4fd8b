/// An error type for the image and image processing crates.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must share an extent do not.
    #[error("Image size mismatch: ({0}, {1}) vs ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the kernel data does not match its declared shape.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    InvalidKernelShape(usize, usize),

    /// Error when a kernel has a zero-sized dimension.
    #[error("Kernel dimensions must be non-zero, got {0}x{1}")]
    EmptyKernel(usize, usize),

    /// Error when the kernel does not fit inside the image.
    #[error("Kernel {0}x{1} is larger than the image {2}x{3}")]
    KernelLargerThanImage(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when a transform matrix cannot be inverted.
    #[error("Cannot compute the inverse: the determinant is zero")]
    CannotComputeDeterminant,
}
