use std::fmt;

use itertools::iproduct;
use once_cell::sync::Lazy;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Active color field of a position string: `w` or `b`.
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Uppercase letters are white pieces, lowercase are black.
    pub fn from_case(c: char) -> Option<Color> {
        if c.is_ascii_uppercase() {
            Some(Color::White)
        } else if c.is_ascii_lowercase() {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn other_color(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }

    pub fn possessive(&self) -> &'static str {
        match self {
            Self::White => "White's",
            Self::Black => "Black's",
        }
    }

    /// Row a pawn of this color starts on.
    pub fn pawn_starting_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Sign of a forward pawn step in row indices: white heads toward row 0.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_human())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Rook,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Bishop => "Bishop",
            Self::Rook => "Rook",
            Self::Knight => "Knight",
            Self::Pawn => "Pawn",
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Pawn => 'P',
        }
    }
}

/// A piece is identified by its kind and color only; it is copied by value
/// into every square it occupies.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a position-string piece letter, e.g. `K` for the white king.
    pub fn from_char(c: char) -> Option<Piece> {
        Some(Piece {
            color: Color::from_case(c)?,
            kind: PieceKind::from_char(c)?,
        })
    }

    pub fn to_char(&self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn to_symbol(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => "♔",
            (Color::White, PieceKind::Queen) => "♕",
            (Color::White, PieceKind::Bishop) => "♗",
            (Color::White, PieceKind::Rook) => "♖",
            (Color::White, PieceKind::Knight) => "♘",
            (Color::White, PieceKind::Pawn) => "♙",
            (Color::Black, PieceKind::King) => "♚",
            (Color::Black, PieceKind::Queen) => "♛",
            (Color::Black, PieceKind::Bishop) => "♝",
            (Color::Black, PieceKind::Rook) => "♜",
            (Color::Black, PieceKind::Knight) => "♞",
            (Color::Black, PieceKind::Pawn) => "♟︎",
        }
    }

    /// "White's Pawn", "Black's Queen", ...
    pub fn to_human(&self) -> String {
        format!("{} {}", self.color.possessive(), self.kind.to_human())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human())
    }
}

/// Board coordinate. Row 0 is rank 8, column 0 is file A.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

/// All 64 squares, row by row from rank 8 down to rank 1.
pub static ALL_SQUARES: Lazy<Vec<Square>> =
    Lazy::new(|| iproduct!(0..8u8, 0..8u8).map(|(row, col)| Square { row, col }).collect());

impl Square {
    /// Build a square from in-range indices. Callers outside the crate go
    /// through `Square::try_new` or `notation::parse_square`.
    pub(crate) const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Signed (row, column) displacement from `self` to `other`.
    pub fn delta_to(&self, other: &Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    pub fn all() -> impl Iterator<Item = Square> {
        ALL_SQUARES.iter().copied()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, (b'8' - self.row) as char)
    }
}

/// Classification of a position for the side to move.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Check => "check",
            Self::Checkmate => "checkmate",
            Self::Stalemate => "stalemate",
        }
    }
}
