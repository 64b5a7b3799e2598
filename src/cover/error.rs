//! Error types for cover operations

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to cover labelling
///
/// These errors occur when variable names given to a cover do not match its
/// dimensions or clash with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The number of input labels differs from the number of inputs
    LabelCountMismatch {
        /// Number of inputs of the cover
        expected: usize,
        /// Number of labels provided
        actual: usize,
    },
    /// The same input label was given twice
    DuplicateLabel {
        /// The repeated label
        name: Arc<str>,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::LabelCountMismatch { expected, actual } => write!(
                f,
                "Label count mismatch: cover has {} input(s) but {} label(s) were given",
                expected, actual
            ),
            CoverError::DuplicateLabel { name } => {
                write!(f, "Input label '{}' is used more than once", name)
            }
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count_mismatch_display() {
        let err = CoverError::LabelCountMismatch {
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 input(s)"));
        assert!(msg.contains("2 label(s)"));
    }

    #[test]
    fn test_duplicate_label_display() {
        let err = CoverError::DuplicateLabel {
            name: Arc::from("a"),
        };
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_cover_error_to_io_error() {
        let err = CoverError::DuplicateLabel {
            name: Arc::from("a"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
