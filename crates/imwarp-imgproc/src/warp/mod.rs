//! Geometric warping of images under 3x3 projective transforms.
//!
//! Transforms are row-major [`Mat3`] matrices mapping source to destination
//! coordinates. The forward warp scatters source pixels into the destination; the
//! backward warps invert the transform once and gather a sample for every destination
//! pixel.

mod backward;
mod forward;

pub use backward::{warp_backward, warp_backward_bilinear, warp_backward_nearest};
pub use forward::warp_forward;

use imwarp_image::ImageError;
use imwarp_linalg::{matrix, Mat3};

/// Invert a transform, reporting singular matrices as image errors.
pub(crate) fn inverse_transform(m: &Mat3) -> Result<Mat3, ImageError> {
    matrix::inverse3x3(m).map_err(|err| {
        log::warn!("cannot invert transform {m:?}: {err}");
        ImageError::CannotComputeDeterminant
    })
}
