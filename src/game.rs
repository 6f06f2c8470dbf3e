use tracing::{debug, info};

use crate::board::Board;
use crate::error::{LoadError, MoveError};
use crate::legality::{assess_move, evaluate_status};
use crate::notation::parse_move;
use crate::types::{Color, GameStatus, Piece, Square};

/// An accepted move and the position it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Status of the side now to move.
    pub status: GameStatus,
}

impl MoveOutcome {
    pub fn to_human(&self) -> String {
        let maybe_capture_str = match self.captured {
            Some(p) => format!(" taking {}", p.to_human()),
            None => "".to_string(),
        };
        let mut human = format!(
            "{} moves from {} to {}{}",
            self.piece.to_human(),
            self.from,
            self.to,
            maybe_capture_str,
        );
        let defender = self.piece.color.other_color();
        match self.status {
            GameStatus::Ongoing => {}
            GameStatus::Check => human.push_str(&format!("\n{defender} is in check")),
            GameStatus::Checkmate => human.push_str(&format!("\n{defender} is in checkmate")),
            GameStatus::Stalemate => human.push_str("\nGame is in stalemate"),
        }
        human
    }
}

/// Turn controller: owns the authoritative board and the game status.
///
/// Only accepted moves change the board or pass the turn. Once the status is
/// checkmate or stalemate every further move is refused and the side to move
/// stays with the player who ended the game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Game::with_board(Board::new())
    }

    pub fn from_fen(fen: &str) -> Result<Self, LoadError> {
        let board = Board::from_fen(fen)?;
        info!(fen, "A new board state is loaded!");
        Ok(Game::with_board(board))
    }

    /// A position that is already lost or drawn for the side to move is
    /// frozen from the start.
    fn with_board(board: Board) -> Self {
        let status = evaluate_status(board.active_color(), &board);
        Self { board, status }
    }

    /// Replace the position. On error the current game is left as it was.
    pub fn load_state(&mut self, fen: &str) -> Result<(), LoadError> {
        *self = Game::from_fen(fen)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Submit a move given as two square tokens, e.g. `("E2", "E4")`.
    pub fn submit_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let result = self
            .ensure_not_over()
            .and_then(|_| parse_move(from, to))
            .and_then(|(from, to)| self.play(from, to));
        if let Err(err) = &result {
            debug!(%err, from, to, "move rejected");
        }
        result
    }

    /// Submit a move between two squares.
    pub fn submit(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let result = self.ensure_not_over().and_then(|_| self.play(from, to));
        if let Err(err) = &result {
            debug!(%err, %from, %to, "move rejected");
        }
        result
    }

    fn ensure_not_over(&self) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;

        if from == to {
            return Err(MoveError::SameSquare { square: from });
        }

        let active = self.board.active_color();
        if piece.color != active {
            return Err(MoveError::WrongTurn { active, piece });
        }

        let is_capture = match self.board.piece_at(to) {
            Some(other) if other.color == piece.color => {
                return Err(MoveError::SameColorCapture { piece, from, to });
            }
            Some(_) => true,
            None => false,
        };

        assess_move(&self.board, from, to, is_capture).map_err(|reason| MoveError::IllegalMove {
            piece,
            from,
            to,
            reason,
        })?;

        let captured = self.board.commit(from, to);
        let defender = active.other_color();
        self.status = evaluate_status(defender, &self.board);
        if !self.status.is_terminal() {
            self.board.toggle_active_color();
        }

        let outcome = MoveOutcome {
            piece,
            from,
            to,
            captured,
            status: self.status,
        };
        info!(
            %from,
            %to,
            piece = %piece,
            captured = captured.map(|p| p.to_human()),
            status = self.status.to_human(),
            "move accepted"
        );
        Ok(outcome)
    }
}
