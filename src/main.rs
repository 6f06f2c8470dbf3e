//! Command-line front end: load a position, then submit moves.
//!
//! Usage:
//!   cargo run -- E2 E4 E7 E5
//!   cargo run -- --fen "7K/8/8/8/8/8/3Q4/k7 w" D2 C2
//!   echo "E2 E4" | cargo run -- --board
//!
//! Moves come from the positional arguments in pairs, or from stdin one pair
//! per line when none are given. Rejected moves are reported and the session
//! carries on.

use std::io::{self, BufRead};

use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use chess_legality::board::STARTING_POSITION_FEN;
use chess_legality::game::Game;

#[derive(Parser, Debug)]
#[command(name = "chess_legality")]
#[command(about = "Check and play chess moves from a position string")]
struct Args {
    /// Position to start from (piece placement and active color)
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Print the board after every accepted move
    #[arg(long)]
    board: bool,

    /// Squares in pairs, e.g. `E2 E4 E7 E5`. Read from stdin when empty
    moves: Vec<String>,
}

fn submit(game: &mut Game, from: &str, to: &str, draw: bool) {
    match game.submit_move(from, to) {
        Ok(outcome) => {
            println!("{}", outcome.to_human());
            if draw {
                game.board().draw_to_terminal();
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.moves.len() % 2 != 0 {
        bail!("moves must be given as source and destination pairs");
    }

    let mut game = Game::from_fen(&args.fen).wrap_err("could not load the position")?;
    println!("A new board state is loaded!");
    if args.board {
        game.board().draw_to_terminal();
    }

    if !args.moves.is_empty() {
        for (from, to) in args.moves.iter().tuples() {
            submit(&mut game, from, to, args.board);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.wrap_err("could not read from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_whitespace().collect_tuple::<(&str, &str)>() {
            Some((from, to)) => submit(&mut game, from, to, args.board),
            None => println!("Expected a source and a destination square, got `{line}`"),
        }
    }
    Ok(())
}
