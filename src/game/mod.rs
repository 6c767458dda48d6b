//! Core Connect Four game logic: the board model with its positional queries,
//! player labels, and the live game state that owns turn order.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
