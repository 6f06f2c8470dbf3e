pub mod types;
pub mod error;
pub mod obstruction;
pub mod rules;
pub mod board;
pub mod legality;
pub mod notation;
pub mod game;
