//! King safety and position classification.
//!
//! Legality is decided in two stages: the piece rule first, then a simulated
//! copy of the board is checked for an attack on the mover's king. A move
//! that fails the piece rule is never simulated.

use tracing::trace;

use crate::board::Board;
use crate::error::IllegalReason;
use crate::rules::valid_move;
use crate::types::{Color, GameStatus, Square};

/// Is the king of `color` attacked by any opposing piece on `board`?
///
/// Panics if `board` holds no king of `color`. `Board::from_fen` refuses such
/// positions and positions where a king could be taken, and boards only
/// change through `Game`, which never plays a move leaving a king en prise.
pub fn in_check(color: Color, board: &Board) -> bool {
    let king_square = match board.king_square(color) {
        Some(square) => square,
        None => panic!("no {color} king on the board"),
    };
    board
        .pieces(color.other_color())
        .any(|(square, piece)| valid_move(piece, square, king_square, board, true))
}

/// Run the piece rule, then the king-safety check, for the piece on `from`.
///
/// Returns `Ok(())` for a legal move or the stage that refused it. An empty
/// `from` square is reported as a geometry failure.
pub fn assess_move(board: &Board, from: Square, to: Square, is_capture: bool) -> Result<(), IllegalReason> {
    let piece = board.piece_at(from).ok_or(IllegalReason::Geometry)?;

    if !valid_move(piece, from, to, board, is_capture) {
        return Err(IllegalReason::Geometry);
    }

    let hypothetical = board.simulate(from, to);
    if in_check(piece.color, &hypothetical) {
        return Err(IllegalReason::ExposesKing);
    }
    Ok(())
}

pub fn is_legal_and_safe(board: &Board, from: Square, to: Square, is_capture: bool) -> bool {
    assess_move(board, from, to, is_capture).is_ok()
}

/// Does `color` have at least one legal move?
///
/// Every piece of `color` is tried against every square not held by its own
/// side. Stops at the first legal move found.
pub fn has_any_legal_move(color: Color, board: &Board) -> bool {
    let found = board.pieces(color).find_map(|(from, _)| {
        Square::all()
            .filter_map(|to| match board.piece_at(to) {
                Some(other) if other.color == color => None,
                Some(_) => Some((to, true)),
                None => Some((to, false)),
            })
            .find(|&(to, is_capture)| is_legal_and_safe(board, from, to, is_capture))
            .map(|(to, _)| (from, to))
    });
    if let Some((from, to)) = found {
        trace!(%color, %from, %to, "found legal response");
    } else {
        trace!(%color, "no legal response");
    }
    found.is_some()
}

/// Classify the position for `defender`, the side about to move.
pub fn evaluate_status(defender: Color, board: &Board) -> GameStatus {
    let checked = in_check(defender, board);
    let can_move = has_any_legal_move(defender, board);
    match (checked, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Ongoing,
    }
}
