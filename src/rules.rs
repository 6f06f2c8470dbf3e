//! Per-kind movement rules.
//!
//! `valid_move` answers whether `piece` standing on `from` may go to `to` on
//! `board`, looking only at geometry, obstruction and the destination's
//! occupant. Whether the move leaves the mover's own king attacked is decided
//! by the legality module.

use crate::board::Board;
use crate::obstruction::{column_is_clear, diagonal_is_clear, row_is_clear};
use crate::types::{Color, Piece, PieceKind, Square};

pub fn valid_move(piece: Piece, from: Square, to: Square, board: &Board, is_capture: bool) -> bool {
    match piece.kind {
        PieceKind::King => valid_king_move(from, to),
        PieceKind::Queen => {
            valid_rook_move(piece.color, from, to, board)
                || valid_bishop_move(piece.color, from, to, board)
        }
        PieceKind::Bishop => valid_bishop_move(piece.color, from, to, board),
        PieceKind::Rook => valid_rook_move(piece.color, from, to, board),
        PieceKind::Knight => valid_knight_move(piece.color, from, to, board),
        PieceKind::Pawn => valid_pawn_move(piece.color, from, to, board, is_capture),
    }
}

/// Destination is empty or holds a piece of the other color.
fn can_land_on(color: Color, to: Square, board: &Board) -> bool {
    board.piece_at(to).map_or(true, |other| other.color != color)
}

fn valid_king_move(from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    row_delta.abs() <= 1 && col_delta.abs() <= 1 && (row_delta, col_delta) != (0, 0)
}

fn valid_bishop_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    row_delta != 0
        && row_delta.abs() == col_delta.abs()
        && diagonal_is_clear(board, from, to)
        && can_land_on(color, to, board)
}

fn valid_rook_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    let path_clear = match (row_delta, col_delta) {
        (0, 0) => return false,
        (0, _) => row_is_clear(board, from, to),
        (_, 0) => column_is_clear(board, from, to),
        _ => return false,
    };
    path_clear && can_land_on(color, to, board)
}

// Knights jump, so there is nothing to scan.
fn valid_knight_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    row_delta.abs() * col_delta.abs() == 2 && can_land_on(color, to, board)
}

fn valid_pawn_move(color: Color, from: Square, to: Square, board: &Board, is_capture: bool) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    let forward = row_delta * color.pawn_direction();

    if is_capture {
        return forward == 1 && col_delta.abs() == 1;
    }

    if board.is_occupied(to) || col_delta != 0 {
        return false;
    }
    match forward {
        1 => true,
        2 => from.row() == color.pawn_starting_row() && column_is_clear(board, from, to),
        _ => false,
    }
}
