//! Error types for rule enforcement and notation parsing.

use crate::types::{Color, Square};

/// Reasons a requested move is refused. A refused move never mutates state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece at source square {0}")]
    NoPieceAtSource(Square),

    #[error("piece at {square} belongs to {owner}, but {to_move} is to move")]
    NotYourPiece {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    #[error("capture chain in progress: the piece on {0} must keep capturing")]
    ChainInProgress(Square),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("illegal turn starting at {0}")]
    IllegalTurn(Square),

    #[error("game is over, {0} has won")]
    GameOver(Color),
}

/// Errors raised while reading square numbers, moves and position strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("square number out of range: {0}")]
    BadSquare(String),

    #[error("malformed move text: {0}")]
    BadMove(String),

    #[error("move {0} is not legal in this position")]
    NotLegal(String),

    #[error("malformed position string: {0}")]
    BadPosition(String),
}
