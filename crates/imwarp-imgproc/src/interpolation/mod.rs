//! Pixel sampling methods for image transformations.
//!
//! This module provides the sampling primitives used when resampling images
//! during geometric transformations.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest pixel value (no interpolation)
//! - **Bilinear**: linear interpolation between the four neighboring pixels
//!
//! Every sampler treats positions outside the image as missing: the nearest
//! samplers return `None` and the bilinear sampler substitutes zero for each
//! missing neighbor.

mod bilinear;

/// Grid generation and coordinate mapping utilities.
pub mod grid;

mod nearest;

mod remap;

pub use bilinear::bilinear_interpolation;
pub use nearest::{nearest_neighbor_interpolation, truncated_neighbor_interpolation};
pub use remap::remap;

/// Interpolation mode for the backward warp operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    #[default]
    Nearest,
}
