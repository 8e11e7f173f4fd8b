use crate::error::LinalgError;

/// A 3x3 matrix stored in row-major order.
pub type Mat3 = [f64; 9];

/// A 4x4 matrix stored in row-major order.
pub type Mat4 = [f64; 16];

/// The 3x3 identity matrix.
#[rustfmt::skip]
pub const IDENTITY3: Mat3 = [
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
];

/// The 4x4 identity matrix.
#[rustfmt::skip]
pub const IDENTITY4: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// Compute the determinant of a 3x3 matrix.
#[rustfmt::skip]
pub fn determinant3x3(m: &Mat3) -> f64 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &Mat3) -> Mat3 {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

/// Invert a 3x3 matrix.
///
/// # Errors
///
/// Returns [`LinalgError::SingularMatrix`] if the determinant is zero or not finite.
///
/// # Example
///
/// ```
/// use imwarp_linalg::matrix::inverse3x3;
///
/// let m = [1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
/// let inv = inverse3x3(&m).unwrap();
/// assert_eq!(inv, [1.0, 0.0, 1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn inverse3x3(m: &Mat3) -> Result<Mat3, LinalgError> {
    let det = determinant3x3(m);

    if det == 0.0 || !det.is_finite() {
        return Err(LinalgError::SingularMatrix(det));
    }

    let inv_det = 1.0 / det;
    Ok(adjugate3x3(m).map(|v| v * inv_det))
}

/// Multiply two 3x3 matrices, returning `a · b`.
pub fn mul3x3(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [0.0; 9];
    for r in 0..3 {
        for c in 0..3 {
            out[r * 3 + c] = (0..3).map(|k| a[r * 3 + k] * b[k * 3 + c]).sum();
        }
    }
    out
}

/// Multiply a chain of 3x3 matrices left to right, returning `ms[0] · ms[1] · ...`.
pub fn multi_dot3x3(ms: &[Mat3]) -> Mat3 {
    ms.iter().fold(IDENTITY3, |acc, m| mul3x3(&acc, m))
}

/// Transpose a 3x3 matrix.
pub fn transpose3x3(m: &Mat3) -> Mat3 {
    [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]]
}

/// Multiply a 3x3 matrix by a column vector, returning `m · v`.
pub fn mul_vec3(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0] * v[0] + m[1] * v[1] + m[2] * v[2],
        m[3] * v[0] + m[4] * v[1] + m[5] * v[2],
        m[6] * v[0] + m[7] * v[1] + m[8] * v[2],
    ]
}

/// Apply a homogeneous transform to the point (`x`, `y`).
///
/// The point is lifted to `[x, y, 1]`, multiplied by `m` and divided by the resulting
/// `w` component.
///
/// Returns `None` if `w` is zero or the normalized point is not finite.
pub fn transform_point(m: &Mat3, x: f64, y: f64) -> Option<(f64, f64)> {
    let [u, v, w] = mul_vec3(m, &[x, y, 1.0]);
    if w == 0.0 {
        return None;
    }
    let (u, v) = (u / w, v / w);
    (u.is_finite() && v.is_finite()).then_some((u, v))
}

/// Compute the determinant of a 4x4 matrix.
pub fn determinant4x4(m: &Mat4) -> f64 {
    let (a, b) = minors4x4(m);
    a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0]
}

// 2x2 minors of the top two rows (a) and the bottom two rows (b).
#[rustfmt::skip]
fn minors4x4(m: &Mat4) -> ([f64; 6], [f64; 6]) {
    let a = [
        m[0] * m[5] - m[1] * m[4],
        m[0] * m[6] - m[2] * m[4],
        m[0] * m[7] - m[3] * m[4],
        m[1] * m[6] - m[2] * m[5],
        m[1] * m[7] - m[3] * m[5],
        m[2] * m[7] - m[3] * m[6],
    ];
    let b = [
        m[8] * m[13] - m[9] * m[12],
        m[8] * m[14] - m[10] * m[12],
        m[8] * m[15] - m[11] * m[12],
        m[9] * m[14] - m[10] * m[13],
        m[9] * m[15] - m[11] * m[13],
        m[10] * m[15] - m[11] * m[14],
    ];
    (a, b)
}

/// Invert a 4x4 matrix.
///
/// # Errors
///
/// Returns [`LinalgError::SingularMatrix`] if the determinant is zero or not finite.
#[rustfmt::skip]
pub fn inverse4x4(m: &Mat4) -> Result<Mat4, LinalgError> {
    let (a, b) = minors4x4(m);
    let det = a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0];

    if det == 0.0 || !det.is_finite() {
        return Err(LinalgError::SingularMatrix(det));
    }

    let adj = [
         m[5] * b[5] - m[6] * b[4] + m[7] * b[3],
        -m[1] * b[5] + m[2] * b[4] - m[3] * b[3],
         m[13] * a[5] - m[14] * a[4] + m[15] * a[3],
        -m[9] * a[5] + m[10] * a[4] - m[11] * a[3],
        -m[4] * b[5] + m[6] * b[2] - m[7] * b[1],
         m[0] * b[5] - m[2] * b[2] + m[3] * b[1],
        -m[12] * a[5] + m[14] * a[2] - m[15] * a[1],
         m[8] * a[5] - m[10] * a[2] + m[11] * a[1],
         m[4] * b[4] - m[5] * b[2] + m[7] * b[0],
        -m[0] * b[4] + m[1] * b[2] - m[3] * b[0],
         m[12] * a[4] - m[13] * a[2] + m[15] * a[0],
        -m[8] * a[4] + m[9] * a[2] - m[11] * a[0],
        -m[4] * b[3] + m[5] * b[1] - m[6] * b[0],
         m[0] * b[3] - m[1] * b[1] + m[2] * b[0],
        -m[12] * a[3] + m[13] * a[1] - m[14] * a[0],
         m[8] * a[3] - m[9] * a[1] + m[10] * a[0],
    ];

    let inv_det = 1.0 / det;
    Ok(adj.map(|v| v * inv_det))
}

/// Multiply two 4x4 matrices, returning `a · b`.
pub fn mul4x4(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[r * 4 + c] = (0..4).map(|k| a[r * 4 + k] * b[k * 4 + c]).sum();
        }
    }
    out
}
