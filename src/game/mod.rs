//! Core Connect Four game logic: board representation, player markers, and the
//! Playing/GameOver state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, WinningLine, COLS, ROWS, WIN_LENGTH};
pub use player::{ParsePlayerError, Player};
pub use state::{GameOutcome, GameState, MoveError, MoveResult, Phase};
