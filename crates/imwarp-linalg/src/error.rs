/// An error type for the linalg module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LinalgError {
    /// The matrix has a zero (or non-finite) determinant and cannot be inverted.
    #[error("Matrix is singular (determinant = {0})")]
    SingularMatrix(f64),
}
