//! Crate-wide error type.
//!
//! The rules core and search never fail; errors only surface at the edges
//! (diagram parsing, terminal input, harness setup).

use std::error::Error;
use std::fmt;

pub type CheckersResult<T> = Result<T, CheckersError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// A board diagram could not be parsed.
    InvalidDiagram(String),
    /// A coordinate fell outside the 8x8 grid.
    OutOfBounds { row: i64, col: i64 },
    /// Free-form input (terminal, command line) was malformed.
    InvalidInput(String),
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::InvalidDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
            CheckersError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({row}, {col}) is off the board")
            }
            CheckersError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for CheckersError {}
