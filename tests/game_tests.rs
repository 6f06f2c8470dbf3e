//! Integration tests driving whole games through the turn controller
//!
//! Run with: cargo test --test game_tests

use chess_legality::board::{Board, STARTING_POSITION_FEN};
use chess_legality::error::{IllegalReason, LoadError, MoveError};
use chess_legality::game::Game;
use chess_legality::legality::in_check;
use chess_legality::notation::parse_square;
use chess_legality::types::{Color, GameStatus, Piece, PieceKind};
use pretty_assertions::assert_eq;

/// Play `moves` in order, asserting each is accepted, and return the statuses
/// reported after every move.
fn play(game: &mut Game, moves: &[(&str, &str)]) -> Vec<GameStatus> {
    moves
        .iter()
        .map(|(from, to)| match game.submit_move(from, to) {
            Ok(outcome) => outcome.status,
            Err(err) => panic!("{from}-{to} rejected: {err}"),
        })
        .collect()
}

#[test]
fn test_turn_alternation_from_start() {
    let mut game = Game::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap();

    game.submit_move("E2", "E4").unwrap();
    assert_eq!(game.active_color(), Color::Black);

    game.submit_move("E7", "E5").unwrap();
    assert_eq!(game.active_color(), Color::White);

    let err = game.submit_move("E4", "E5").unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalMove {
            piece: Piece::new(Color::White, PieceKind::Pawn),
            from: parse_square("E4").unwrap(),
            to: parse_square("E5").unwrap(),
            reason: IllegalReason::Geometry,
        }
    );
    assert_eq!(err.to_string(), "White's Pawn cannot move to E5!");
    // rejected moves never pass the turn
    assert_eq!(game.active_color(), Color::White);
}

#[test]
fn test_opening_session_rejections() {
    let mut game = Game::from_fen(STARTING_POSITION_FEN).unwrap();

    let err = game.submit_move("D7", "D6").unwrap_err();
    assert_eq!(err.to_string(), "It is not Black's turn to move!");

    let err = game.submit_move("D4", "H6").unwrap_err();
    assert_eq!(err.to_string(), "There is no piece at position D4!");

    game.submit_move("D2", "D4").unwrap();

    // e7 still blocks the bishop
    let err = game.submit_move("F8", "B4").unwrap_err();
    assert_eq!(err.to_string(), "Black's Bishop cannot move to B4!");
    assert_eq!(game.active_color(), Color::Black);
}

#[test]
fn test_alekhine_vasic_1931() {
    let mut game = Game::new();
    let statuses = play(
        &mut game,
        &[
            ("E2", "E4"),
            ("E7", "E6"),
            ("D2", "D4"),
            ("D7", "D5"),
            ("B1", "C3"),
            ("F8", "B4"),
            ("F1", "D3"),
            ("B4", "C3"),
            ("B2", "C3"),
            ("H7", "H6"),
            ("C1", "A3"),
            ("B8", "D7"),
            ("D1", "E2"),
            ("D5", "E4"),
            ("D3", "E4"),
            ("G8", "F6"),
            ("E4", "D3"),
            ("B7", "B6"),
            ("E2", "E6"),
            ("F7", "E6"),
            ("D3", "G6"),
        ],
    );

    let checks: Vec<usize> = statuses
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == GameStatus::Check)
        .map(|(i, _)| i)
        .collect();
    // Bxc3+ and Qxe6+
    assert_eq!(checks, vec![7, 18]);
    assert_eq!(statuses.last(), Some(&GameStatus::Checkmate));
    assert!(game.is_over());

    assert_eq!(
        game.submit_move("E8", "F7"),
        Err(MoveError::GameOver {
            status: GameStatus::Checkmate
        })
    );
}

#[test]
fn test_loyd_ten_move_stalemate() {
    let mut game = Game::new();
    let statuses = play(
        &mut game,
        &[
            ("E2", "E3"),
            ("A7", "A5"),
            ("D1", "H5"),
            ("A8", "A6"),
            ("H5", "A5"),
            ("H7", "H5"),
            ("H2", "H4"),
            ("A6", "H6"),
            ("A5", "C7"),
            ("F7", "F6"),
            ("C7", "D7"),
            ("E8", "F7"),
            ("D7", "B7"),
            ("D8", "D3"),
            ("B7", "B8"),
            ("D3", "H7"),
            ("B8", "C8"),
            ("F7", "G6"),
            ("C8", "E6"),
        ],
    );
    assert_eq!(statuses[10], GameStatus::Check);
    assert_eq!(statuses.last(), Some(&GameStatus::Stalemate));
    assert!(game.is_over());
    assert_eq!(game.board().to_fen(), "5bnr/4p1pq/4Qpkr/7p/7P/4P3/PPPP1PP1/RNB1KBNR w");
}

#[test]
fn test_terminal_game_rejects_everything() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")],
    );
    assert_eq!(game.status(), GameStatus::Checkmate);
    let frozen = game.board().clone();
    let frozen_color = game.active_color();

    for (from, to) in [("E1", "F2"), ("A2", "A3"), ("H4", "E1"), ("", "E4"), ("E1", "E1")] {
        assert_eq!(
            game.submit_move(from, to),
            Err(MoveError::GameOver {
                status: GameStatus::Checkmate
            })
        );
        assert_eq!(game.board(), &frozen);
        assert_eq!(game.active_color(), frozen_color);
    }
}

#[test]
fn test_pinned_knight_cannot_move() {
    // after 1. e4 e5 2. Nc3 Bb4 3. d3 the c3 knight is pinned to the king
    let mut game = Game::new();
    play(
        &mut game,
        &[("E2", "E4"), ("E7", "E5"), ("B1", "C3"), ("F8", "B4"), ("D2", "D3"), ("G8", "F6")],
    );
    let err = game.submit_move("C3", "D5").unwrap_err();
    assert!(matches!(
        err,
        MoveError::IllegalMove {
            reason: IllegalReason::ExposesKing,
            ..
        }
    ));
    assert_eq!(game.active_color(), Color::White);
}

#[test]
fn test_same_color_capture_message() {
    let mut game = Game::new();
    let err = game.submit_move("D1", "D2").unwrap_err();
    assert_eq!(err.to_string(), "White's Queen cannot move to D2!");
    assert!(matches!(err, MoveError::SameColorCapture { .. }));
}

#[test]
fn test_load_state_round_trip() {
    let fen = "r3k2r/p1pp1pb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let board = Board::from_fen(fen).unwrap();

    let mut expected = String::new();
    for rank in fen.split(' ').next().unwrap().split('/') {
        for c in rank.chars() {
            match c.to_digit(10) {
                Some(n) => (0..n).for_each(|_| expected.push('.')),
                None => expected.push(c),
            }
        }
    }
    let actual: String = chess_legality::types::Square::all()
        .map(|s| board.piece_at(s).map_or('.', |p| p.to_char()))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(board.active_color(), Color::White);
}

#[test]
fn test_load_rejects_kingless_position() {
    assert_eq!(
        Game::from_fen("rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap_err(),
        LoadError::MissingKing(Color::Black)
    );
}

#[test]
fn test_failed_load_keeps_both_kings_on_board() {
    let mut game = Game::new();
    game.submit_move("E2", "E4").unwrap();
    let before = game.board().clone();

    // white to move with the black king already attacked by the e7 rook
    assert_eq!(
        game.load_state("4k3/4R3/8/8/8/8/8/4K3 w"),
        Err(LoadError::OpponentInCheck(Color::Black))
    );
    assert_eq!(game.board(), &before);
    assert!(!in_check(Color::White, game.board()));
    assert!(!in_check(Color::Black, game.board()));
}
