use std::fmt;

/// Failures raised by the vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The divide operation was given a scalar of zero.
    DivisionByZero,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for VectorError {}

/// An operation tag outside of the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError(pub String);

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operation: {:?}", self.0)
    }
}

impl std::error::Error for ParseOperationError {}
