//! Error types for the rules engine.

use crate::moves::Move;

/// Errors reported by move construction, parsing, and board mutation.
///
/// None of them leave a board partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QirkatError {
    /// Malformed move notation.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed board description or side to move.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// Geometrically impossible step or jump.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// Move rejected by the board's legality check.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// `undo` called with nothing applied.
    #[error("no move to undo")]
    EmptyHistory,
}

pub type Result<T> = std::result::Result<T, QirkatError>;
