//! Builders for 2D homogeneous transforms.
//!
//! All matrices act on column vectors `[x, y, 1]` unless stated otherwise.

use crate::matrix::{inverse3x3, multi_dot3x3, transform_point, transpose3x3, Mat3};
use crate::LinalgError;

/// Returns a transform for uniform scaling about the origin by `scale_factor`.
pub fn scaling(scale_factor: f64) -> Mat3 {
    [
        scale_factor,
        0.0,
        0.0,
        0.0,
        scale_factor,
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

/// Returns a transform translating by `point[0]` along x and `point[1]` along y.
pub fn translation(point: [f64; 2]) -> Mat3 {
    [1.0, 0.0, point[0], 0.0, 1.0, point[1], 0.0, 0.0, 1.0]
}

/// Returns a transform for anti-clockwise rotation about the origin by `angle` degrees.
pub fn rotation(angle: f64) -> Mat3 {
    let (sin, cos) = angle.to_radians().sin_cos();
    [cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0]
}

/// Returns the compound transform that rotates by `angle` degrees, then scales by
/// `scale_factor`, then translates by `point`, i.e. `T · S · R`.
///
/// # Example
///
/// ```
/// use imwarp_linalg::transforms::rotation_scaling_and_translation;
///
/// let m = rotation_scaling_and_translation(0.0, 2.0, [1.0, -1.0]);
/// assert_eq!(m, [2.0, 0.0, 1.0, 0.0, 2.0, -1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn rotation_scaling_and_translation(angle: f64, scale_factor: f64, point: [f64; 2]) -> Mat3 {
    multi_dot3x3(&[translation(point), scaling(scale_factor), rotation(angle)])
}

/// Same compound transform as [`rotation_scaling_and_translation`], transposed for
/// post-multiplication of row vectors (`[x, y, 1] · M`).
pub fn rotation_scaling_and_translation_postmultiplied(
    angle: f64,
    scale_factor: f64,
    point: [f64; 2],
) -> Mat3 {
    transpose3x3(&rotation_scaling_and_translation(
        angle,
        scale_factor,
        point,
    ))
}

/// Returns a transform that rotates by `angle` degrees and scales by `scale_factor`
/// about `center` instead of the origin, i.e. `T⁻¹ · R · S · T` where `T` moves
/// `center` to the origin.
///
/// # Errors
///
/// Never fails for finite `center`; the error is propagated from the inversion of `T`.
pub fn rotation_about_point(
    center: [f64; 2],
    angle: f64,
    scale_factor: f64,
) -> Result<Mat3, LinalgError> {
    let to_origin = translation([-center[0], -center[1]]);
    let back = inverse3x3(&to_origin)?;
    Ok(multi_dot3x3(&[
        back,
        rotation(angle),
        scaling(scale_factor),
        to_origin,
    ]))
}

/// Apply a homogeneous transform to a set of 2D points.
///
/// Points whose homogeneous `w` becomes zero are mapped to `None`.
pub fn transform_points(m: &Mat3, points: &[[f64; 2]]) -> Vec<Option<[f64; 2]>> {
    points
        .iter()
        .map(|p| transform_point(m, p[0], p[1]).map(|(x, y)| [x, y]))
        .collect()
}
