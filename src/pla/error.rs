//! Errors raised while reading single-output PLA text
//!
//! Writing only fails on I/O, so the writer reports plain [`io::Error`]s.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::cover::error::CoverError;

/// A malformed PLA file
///
/// Line numbers are one-based and count every physical line, comments
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// No `.i` line and no cube row to infer the width from
    NoInputCount,
    /// `.i`, `.o` or `.type` with a value that does not parse
    BadDirective {
        line: usize,
        directive: &'static str,
        value: Arc<str>,
    },
    /// A `.o` value or a cube output part wider than one column
    MultipleOutputs { line: usize, count: usize },
    /// Input column that is not `0`, `1`, `-`, `~`, `x` or `X`
    BadInputCharacter {
        line: usize,
        column: usize,
        character: char,
    },
    /// Output column that is not one of `0 1 2 3 4 - ~`
    BadOutputCharacter { line: usize, character: char },
    /// A row whose input part disagrees with `.i` or the first row
    RowWidth {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// `.ilb` names a different number of inputs than `.i`
    InputLabelCount { expected: usize, actual: usize },
    /// `.ob` with more than one name
    OutputLabelCount { line: usize, count: usize },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::NoInputCount => {
                write!(f, "no .i line and no rows to take the input count from")
            }
            PLAError::BadDirective {
                line,
                directive,
                value,
            } => write!(f, "line {}: cannot parse '{} {}'", line, directive, value),
            PLAError::MultipleOutputs { line, count } => write!(
                f,
                "line {}: {} outputs given, only one output is handled",
                line, count
            ),
            PLAError::BadInputCharacter {
                line,
                column,
                character,
            } => write!(
                f,
                "line {}: input column {} holds '{}'",
                line, column, character
            ),
            PLAError::BadOutputCharacter { line, character } => {
                write!(f, "line {}: output column holds '{}'", line, character)
            }
            PLAError::RowWidth {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {}: row has {} input column(s), expected {}",
                line, actual, expected
            ),
            PLAError::InputLabelCount { expected, actual } => write!(
                f,
                ".ilb names {} input(s) but the function has {}",
                actual, expected
            ),
            PLAError::OutputLabelCount { line, count } => {
                write!(f, "line {}: .ob names {} outputs", line, count)
            }
        }
    }
}

impl std::error::Error for PLAError {}

/// Why a cover could not be read
#[derive(Debug)]
pub enum PLAReadError {
    /// The text is not a valid single-output PLA
    Format(PLAError),
    /// The labels are valid PLA but not a valid cover (duplicate names)
    Cover(CoverError),
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::Format(e) => write!(f, "malformed PLA: {}", e),
            PLAReadError::Cover(e) => write!(f, "invalid labels: {}", e),
            PLAReadError::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::Format(e) => Some(e),
            PLAReadError::Cover(e) => Some(e),
            PLAReadError::Io(e) => e.source(),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::Format(err)
    }
}

impl From<CoverError> for PLAReadError {
    fn from(err: CoverError) -> Self {
        PLAReadError::Cover(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

/// I/O failures pass through unchanged; everything else is `InvalidData`
impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
