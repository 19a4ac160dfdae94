//! Error types for truth-table reading and transposition

use std::fmt;
use std::io;

/// Errors related to the shape of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    /// The table has no rows, so it has no output columns
    Empty,
    /// A row has a different number of outputs than the first row
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Number of outputs in the first row
        expected: usize,
        /// Number of outputs in this row
        actual: usize,
    },
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::Empty => write!(f, "Truth table has no rows"),
            TruthTableError::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Row {} has {} outputs, expected {}",
                row, actual, expected
            ),
        }
    }
}

impl std::error::Error for TruthTableError {}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a truth table
///
/// This error type is returned by the `TruthTableReader` methods.
#[derive(Debug)]
pub enum TruthTableReadError {
    /// Truth-table shape error
    Format(TruthTableError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for TruthTableReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableReadError::Format(e) => write!(f, "Truth table format error: {}", e),
            TruthTableReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TruthTableReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TruthTableReadError::Format(e) => Some(e),
            TruthTableReadError::Io(e) => Some(e),
        }
    }
}

impl From<TruthTableError> for TruthTableReadError {
    fn from(err: TruthTableError) -> Self {
        TruthTableReadError::Format(err)
    }
}

impl From<io::Error> for TruthTableReadError {
    fn from(err: io::Error) -> Self {
        TruthTableReadError::Io(err)
    }
}

impl From<TruthTableReadError> for io::Error {
    fn from(err: TruthTableReadError) -> Self {
        match err {
            TruthTableReadError::Io(e) => e,
            TruthTableReadError::Format(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}
