#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the linalg module.
pub mod error;

/// 3x3 and 4x4 row-major matrix primitives.
pub mod matrix;

/// Builders for 2D homogeneous transforms.
pub mod transforms;

pub use crate::error::LinalgError;
pub use crate::matrix::{Mat3, Mat4};
