//! Error types for operator construction and checked application.
//!
//! Misusing an operator (a non-square matrix, undersized buffers) is a programming error, and the
//! default entry points panic on it. The checked variants ([`crate::DenseSymMatProd::try_new`],
//! [`crate::DenseSymMatProd::try_perform_op`]) report the same conditions through
//! [`OperatorError`] instead, for callers that build operators from untrusted shapes.
use thiserror::Error;

/// Represents all errors reported by the checked operator APIs.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct OperatorError(#[from] OperatorErrorKind);

/// Private enum containing the distinct kinds of errors.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum OperatorErrorKind {
    /// The matrix view handed to a constructor does not describe a square matrix.
    #[error("Operator matrix must be square, got {nrows}x{ncols}.")]
    NotSquare { nrows: usize, ncols: usize },

    /// An input or output buffer does not match the operator dimension.
    #[error(
        "Dimension mismatch: {buffer} buffer has length {actual} but the operator expects {expected}."
    )]
    DimensionMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl PartialEq for OperatorError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_error_message() {
        let error = OperatorError(OperatorErrorKind::NotSquare { nrows: 3, ncols: 2 });
        assert_eq!(error.to_string(), "Operator matrix must be square, got 3x2.");
    }

    #[test]
    fn test_dimension_mismatch_error_message() {
        let error = OperatorError(OperatorErrorKind::DimensionMismatch {
            buffer: "input",
            expected: 100,
            actual: 99,
        });
        let expected_message =
            "Dimension mismatch: input buffer has length 99 but the operator expects 100.";
        assert_eq!(error.to_string(), expected_message);
    }

    #[test]
    fn test_errors_compare_by_kind() {
        let a: OperatorError = OperatorErrorKind::NotSquare { nrows: 1, ncols: 2 }.into();
        let b: OperatorError = OperatorErrorKind::NotSquare { nrows: 1, ncols: 2 }.into();
        let c: OperatorError = OperatorErrorKind::NotSquare { nrows: 2, ncols: 1 }.into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
