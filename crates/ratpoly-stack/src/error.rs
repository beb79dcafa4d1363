//! Stack errors.

use ratpoly_poly::ParsePolyError;
use thiserror::Error;

/// Errors produced by stack operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// The operation needs more elements than the stack holds.
    #[error("stack underflow: {op} needs {required} element(s), stack has {size}")]
    Underflow {
        /// Name of the failed operation.
        op: &'static str,
        /// Minimum number of elements the operation needs.
        required: usize,
        /// Number of elements on the stack.
        size: usize,
    },

    /// A script token is not a known operation.
    #[error("unknown operation {0:?}")]
    UnknownOp(String),

    /// A script token is neither an operation nor a polynomial.
    #[error("invalid polynomial: {0}")]
    Parse(#[from] ParsePolyError),
}

/// Result type for stack operations.
pub type Result<T> = std::result::Result<T, StackError>;
