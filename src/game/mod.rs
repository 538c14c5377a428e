//! Core Connect Four game logic: board representation, players, move
//! validation, win detection, and the per-game state machine.

mod board;
mod player;
mod state;
mod validator;
mod win;

pub use board::{
    Board, Cell, Column, Dimensions, Mark, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_SIZE, MIN_SIZE,
};
pub use player::{Player, Players, Side};
pub use state::{GameEngine, GameResult, MoveError, Turn};
pub use validator::{MoveCommand, MoveValidator, DEFAULT_END_TOKEN};
pub use win::{Direction, Win, WinDetector, WIN_LENGTH};
