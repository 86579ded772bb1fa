//! Error types for board construction, move resolution and SGF decoding.
//!
//! Every error is recoverable: a failed operation leaves boards and history
//! exactly as they were.

use sgf_parse::{LexerError, SgfParseError};
use thiserror::Error;

/// Errors raised when building or indexing a [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {0}: must be at least 1")]
    InvalidSize(usize),

    #[error("point ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Reasons a move can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Illegal move: ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Illegal move: point ({row}, {col}) is not empty")]
    OccupiedIntersection { row: usize, col: usize },

    #[error("Illegal move: suicide is not allowed")]
    SuicideMove { row: usize, col: usize },
}

/// A game record that could not be turned into a puzzle.
///
/// All variants are "malformed SGF"; they only differ in what was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SgfError {
    #[error("malformed SGF: no game tree found")]
    MissingRoot,

    #[error("malformed SGF: {0}")]
    Syntax(#[source] SgfParseError),

    #[error("malformed SGF: unexpected end of input")]
    UnexpectedEof,

    #[error("malformed SGF: not a Go game record")]
    NotGo,

    #[error("malformed SGF: invalid board size {0:?}")]
    InvalidSize(String),

    #[error("malformed SGF: invalid point {value:?} in property {property}")]
    InvalidPoint { property: String, value: String },
}

impl From<SgfParseError> for SgfError {
    fn from(error: SgfParseError) -> Self {
        match error {
            SgfParseError::UnexpectedEndOfData
            | SgfParseError::LexerError(LexerError::UnexpectedEndOfPropertyValue) => Self::UnexpectedEof,
            SgfParseError::UnexpectedGameType => Self::NotGo,
            other => Self::Syntax(other),
        }
    }
}
