//! Line-of-sight scans used by the sliding pieces.
//!
//! Each scan looks only at the squares strictly between `from` and `to`;
//! neither endpoint is examined. Any occupant blocks, whatever its color.

use std::cmp::{max, min};

use crate::board::Board;
use crate::types::Square;

/// No piece between two squares on the same row.
pub fn row_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let low = min(from.col(), to.col());
    let high = max(from.col(), to.col());
    (low + 1..high).all(|col| !board.is_occupied(Square::new(from.row(), col)))
}

/// No piece between two squares on the same column.
pub fn column_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let low = min(from.row(), to.row());
    let high = max(from.row(), to.row());
    (low + 1..high).all(|row| !board.is_occupied(Square::new(row, from.col())))
}

/// No piece between two squares on the same diagonal.
///
/// The direction is picked from the signs of the row and column deltas, and
/// exactly `|delta| - 1` interior squares are visited.
pub fn diagonal_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (row_delta, col_delta) = from.delta_to(&to);
    let row_step = row_delta.signum();
    let col_step = col_delta.signum();
    let distance = min(row_delta.abs(), col_delta.abs());

    (1..distance).all(|i| {
        Square::try_new(
            from.row() as i8 + i * row_step,
            from.col() as i8 + i * col_step,
        )
        .map_or(true, |square| !board.is_occupied(square))
    })
}
