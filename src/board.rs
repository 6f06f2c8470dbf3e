use itertools::Itertools;

use crate::error::LoadError;
use crate::legality::in_check;
use crate::types::{Color, Piece, PieceKind, Square};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces plus the side to move.
///
/// Row 0 is rank 8 and column 0 is file A, so `squares[row][col]` reads the
/// board the way a position string lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    // who's move it is
    active_color: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, white to move.
    pub fn new() -> Board {
        let mut squares = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            squares[0][col] = Some(Piece::new(Color::Black, kind));
            squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        Board {
            squares,
            active_color: Color::White,
        }
    }

    /// Decode a position string: piece placement, a space, then `w` or `b`.
    ///
    /// Any further fields (castling rights, en passant target, clocks) are
    /// accepted and ignored. The decoded position must hold exactly one king
    /// of each color, and the side not to move must not already be in check.
    pub fn from_fen(fen_string: &str) -> Result<Board, LoadError> {
        let mut parts = fen_string.split_whitespace();
        let piece_data = parts.next().ok_or(LoadError::MissingPlacement)?;
        let color_field = parts.next().ok_or(LoadError::MissingActiveColor)?;

        let active_color = match color_field.chars().exactly_one() {
            Ok(c) => Color::from_char(c),
            Err(_) => None,
        }
        .ok_or_else(|| LoadError::InvalidActiveColor(color_field.to_string()))?;

        let ranks: Vec<&str> = piece_data.split('/').collect();
        if ranks.len() != 8 {
            return Err(LoadError::RankCount(ranks.len()));
        }

        let mut squares = [[None; 8]; 8];
        for (row, rank_data) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for piece_char in rank_data.chars() {
                match piece_char {
                    '1'..='8' => col += piece_char as usize - '0' as usize,
                    _ => {
                        let piece = Piece::from_char(piece_char)
                            .ok_or(LoadError::UnexpectedChar(piece_char))?;
                        if col < 8 {
                            squares[row][col] = Some(piece);
                        }
                        col += 1;
                    }
                }
            }
            if col != 8 {
                return Err(LoadError::RankLength {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let board = Board {
            squares,
            active_color,
        };

        for color in [Color::White, Color::Black] {
            match board.count_kings(color) {
                0 => return Err(LoadError::MissingKing(color)),
                1 => {}
                _ => return Err(LoadError::DuplicateKing(color)),
            }
        }

        let waiting = active_color.other_color();
        if in_check(waiting, &board) {
            return Err(LoadError::OpponentInCheck(waiting));
        }

        Ok(board)
    }

    /// Encode the piece placement and active color, the inverse of `from_fen`.
    pub fn to_fen(&self) -> String {
        let placement = self
            .squares
            .iter()
            .map(|rank| {
                let mut encoded = String::new();
                let mut empty = 0u8;
                for square in rank {
                    match square {
                        Some(piece) => {
                            if empty > 0 {
                                encoded.push((b'0' + empty) as char);
                                empty = 0;
                            }
                            encoded.push(piece.to_char());
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    encoded.push((b'0' + empty) as char);
                }
                encoded
            })
            .join("/");
        let color = match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{placement} {color}")
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Get the color of the side to move
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub(crate) fn toggle_active_color(&mut self) {
        self.active_color = self.active_color.other_color();
    }

    /// All pieces of `color` with the square they stand on.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    fn count_kings(&self, color: Color) -> usize {
        self.pieces(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }

    /// Copy of the board with the piece on `from` moved to `to`. Whatever
    /// stood on `to` is gone from the copy; `self` is untouched.
    pub(crate) fn simulate(&self, from: Square, to: Square) -> Board {
        let mut copy = self.clone();
        copy.commit(from, to);
        copy
    }

    /// Move the piece on `from` to `to` in place, returning the captured
    /// piece if any. Legality is the caller's business.
    pub(crate) fn commit(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from.row() as usize][from.col() as usize].take();
        std::mem::replace(
            &mut self.squares[to.row() as usize][to.col() as usize],
            moving,
        )
    }

    pub fn draw_board(&self) -> String {
        let mut string = String::new();

        for (row, rank) in self.squares.iter().enumerate() {
            let cells = rank
                .iter()
                .map(|p| match p {
                    Some(pp) => pp.to_symbol(),
                    None => ".",
                })
                .join(" ");
            string.push_str(&format!("{} {}\n", 8 - row, cells));
        }
        string.push_str("  A B C D E F G H\n");
        string
    }

    pub fn draw_to_terminal(&self) {
        println!("{}", self.draw_board());
    }
}
