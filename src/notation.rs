//! Conversion of square tokens such as `E2` into board coordinates.
//!
//! A token is a file letter `A`-`H` followed by a rank digit `1`-`8`. Files
//! are upper case only. Bad tokens come back as `MoveError`s, never panics.

use crate::error::MoveError;
use crate::types::Square;

fn check_length(token: &str) -> Result<(), MoveError> {
    if token.chars().count() == 2 {
        Ok(())
    } else {
        Err(MoveError::MalformedSquare {
            token: token.to_string(),
        })
    }
}

pub fn parse_square(token: &str) -> Result<Square, MoveError> {
    check_length(token)?;
    let mut chars = token.chars();
    let (Some(file), Some(rank)) = (chars.next(), chars.next()) else {
        return Err(MoveError::MalformedSquare {
            token: token.to_string(),
        });
    };

    if !('A'..='H').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(MoveError::OffBoard {
            token: token.to_string(),
        });
    }

    // column = file - 'A', row = '8' - rank
    let col = file as u8 - b'A';
    let row = b'8' - rank as u8;
    Square::try_new(row as i8, col as i8).ok_or_else(|| MoveError::OffBoard {
        token: token.to_string(),
    })
}

/// Parse a source and destination token. Both lengths are checked before
/// either token is looked up on the board.
pub fn parse_move(from: &str, to: &str) -> Result<(Square, Square), MoveError> {
    check_length(from)?;
    check_length(to)?;
    Ok((parse_square(from)?, parse_square(to)?))
}
