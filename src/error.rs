//! Error types for position loading and move submission.
//!
//! Every variant is a recoverable rejection: a `Game` stays usable after any
//! `MoveError`, and a failed load leaves no partially built board behind.

use thiserror::Error;

use crate::types::{Color, GameStatus, Piece, Square};

/// Errors raised while decoding a position string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("position string is empty")]
    MissingPlacement,

    #[error("position string has no active color field")]
    MissingActiveColor,

    #[error("invalid active color `{0}` (must be `w` or `b`)")]
    InvalidActiveColor(String),

    #[error("unexpected character `{0}` in piece placement")]
    UnexpectedChar(char),

    #[error("piece placement has {0} ranks (must be 8)")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files (must be 8)")]
    RankLength { rank: usize, files: usize },

    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),

    #[error("{0} is in check but it is not their turn")]
    OpponentInCheck(Color),
}

/// Why the legality engine refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// The piece cannot move that way on this board.
    Geometry,
    /// The move would leave the mover's own king attacked.
    ExposesKing,
}

/// Rejections of a submitted move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Input square `{token}` is invalid")]
    MalformedSquare { token: String },

    #[error("Input square `{token}` is not on the board")]
    OffBoard { token: String },

    #[error("There is no piece at position {square}!")]
    EmptySource { square: Square },

    #[error("Cannot submit move to the same square!")]
    SameSquare { square: Square },

    #[error("It is not {}'s turn to move!", .active.other_color())]
    WrongTurn { active: Color, piece: Piece },

    #[error("{piece} cannot move to {to}!")]
    SameColorCapture { piece: Piece, from: Square, to: Square },

    #[error("{piece} cannot move to {to}!")]
    IllegalMove {
        piece: Piece,
        from: Square,
        to: Square,
        reason: IllegalReason,
    },

    #[error("The game already ended in {}!", .status.to_human())]
    GameOver { status: GameStatus },
}
