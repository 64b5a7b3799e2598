//! Error types for the exact minimizer
//!
//! Every failure the engine can detect is a distinguishable value. Lower-level
//! errors ([`DimensionError`], [`CoverageError`], [`ExpansionError`]) are wrapped
//! by [`MinimizationError`], which is what the pipeline entry points return.
//! All of them convert into [`io::Error`] so they compose with file-based callers.

use std::fmt;
use std::io;

pub use crate::cover::error::CoverError;
pub use crate::pla::error::{PLAError, PLAReadError};

/// Errors raised when minterms or cubes do not fit the declared variable count
///
/// These are detected before prime-implicant generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// A minterm index does not fit in `num_vars` bits
    MintermOutOfRange {
        /// The offending minterm index
        minterm: u64,
        /// The declared number of variables
        num_vars: usize,
    },
    /// More variables were requested than minterm indices can address
    TooManyVariables {
        /// The requested number of variables
        requested: usize,
        /// The largest supported number of variables
        max: usize,
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::MintermOutOfRange { minterm, num_vars } => write!(
                f,
                "Minterm {} does not fit in {} variable(s) (valid range: 0..2^{})",
                minterm, num_vars, num_vars
            ),
            DimensionError::TooManyVariables { requested, max } => write!(
                f,
                "Cannot minimize a function of {} variables (maximum is {})",
                requested, max
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

impl From<DimensionError> for io::Error {
    fn from(err: DimensionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised when parsing an implicant pattern such as `"1-0"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A character other than `0`, `1` or `-`
    InvalidCharacter {
        /// The invalid character
        character: char,
        /// Position in the pattern
        position: usize,
    },
    /// The pattern is wider than the supported number of variables
    Dimension(DimensionError),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid pattern character '{}' at position {}",
                character, position
            ),
            PatternError::Dimension(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Dimension(e) => Some(e),
            PatternError::InvalidCharacter { .. } => None,
        }
    }
}

impl From<DimensionError> for PatternError {
    fn from(err: DimensionError) -> Self {
        PatternError::Dimension(err)
    }
}

/// Errors raised while building the covering problem
///
/// An uncovered minterm means the prime implicants handed to the solver do not
/// describe the on-set: either generation was bypassed with an inconsistent
/// implicant list or a minterm lies outside the declared variable width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    /// An on-set minterm is covered by no prime implicant
    UncoveredMinterm {
        /// The minterm without any covering implicant
        minterm: u64,
    },
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageError::UncoveredMinterm { minterm } => write!(
                f,
                "Input inconsistency: on-set minterm {} is not covered by any prime implicant",
                minterm
            ),
        }
    }
}

impl std::error::Error for CoverageError {}

impl From<CoverageError> for io::Error {
    fn from(err: CoverageError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while expanding Petrick's expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    /// The expression grew beyond the configured term limit
    TermLimitExceeded {
        /// The configured limit
        limit: usize,
        /// Index of the clause whose distribution crossed the limit
        clause: usize,
    },
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionError::TermLimitExceeded { limit, clause } => write!(
                f,
                "Petrick expansion exceeded the limit of {} terms while distributing clause {}",
                limit, clause
            ),
        }
    }
}

impl std::error::Error for ExpansionError {}

impl From<ExpansionError> for io::Error {
    fn from(err: ExpansionError) -> Self {
        io::Error::other(err)
    }
}

/// Errors that can occur during minimization
///
/// This error type is returned by [`exact::minimize`](crate::exact::minimize),
/// [`MinimalCoverSolver::solve`](crate::MinimalCoverSolver::solve) and
/// [`Minimizable::minimize`](crate::Minimizable::minimize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// Minterms or cubes do not fit the variable count
    Dimension(DimensionError),
    /// The prime implicants do not cover the on-set
    Coverage(CoverageError),
    /// Petrick's expression exceeded the configured limit
    Expansion(ExpansionError),
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::Dimension(e) => write!(f, "Dimension error: {}", e),
            MinimizationError::Coverage(e) => write!(f, "Coverage error: {}", e),
            MinimizationError::Expansion(e) => write!(f, "Expansion error: {}", e),
        }
    }
}

impl std::error::Error for MinimizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizationError::Dimension(e) => Some(e),
            MinimizationError::Coverage(e) => Some(e),
            MinimizationError::Expansion(e) => Some(e),
        }
    }
}

impl From<DimensionError> for MinimizationError {
    fn from(err: DimensionError) -> Self {
        MinimizationError::Dimension(err)
    }
}

impl From<CoverageError> for MinimizationError {
    fn from(err: CoverageError) -> Self {
        MinimizationError::Coverage(err)
    }
}

impl From<ExpansionError> for MinimizationError {
    fn from(err: ExpansionError) -> Self {
        MinimizationError::Expansion(err)
    }
}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        match err {
            MinimizationError::Dimension(e) => e.into(),
            MinimizationError::Coverage(e) => e.into(),
            MinimizationError::Expansion(e) => e.into(),
        }
    }
}
