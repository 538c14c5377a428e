use tracing::{debug, instrument};

use super::board::{Board, Column, Dimensions, MoveError as BoardMoveError};
use super::player::{Player, Players, Side};
use super::validator::{MoveCommand, MoveValidator};
use super::win::WinDetector;
use crate::error::MoveRejection;

/// Outcome of the current game, recomputed after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Side),
    Draw,
    Ongoing,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl From<BoardMoveError> for MoveError {
    fn from(err: BoardMoveError) -> Self {
        match err {
            BoardMoveError::ColumnFull => MoveError::ColumnFull,
            BoardMoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// What one submitted line did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The end token was entered.
    Terminated,
    /// A mark landed at 0-based `row` of `column`.
    Played {
        column: Column,
        row: usize,
        result: GameResult,
    },
}

/// Turn order and move application for one game at a time.
///
/// The engine is the only writer of its board. Each move is validated,
/// placed, and checked for a win or draw before the next one is accepted.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Players,
    validator: MoveValidator,
    active: Side,
    result: GameResult,
}

impl GameEngine {
    /// Empty board, player one to move.
    pub fn new(dimensions: Dimensions, players: Players, validator: MoveValidator) -> Self {
        GameEngine {
            board: Board::new(dimensions),
            players,
            validator,
            active: Side::One,
            result: GameResult::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn validator(&self) -> &MoveValidator {
        &self.validator
    }

    /// Side to move. Once the game is won this is the winner.
    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        self.players.get(self.active)
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Columns that can still take a mark; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<Column> {
        if self.is_terminal() {
            return Vec::new();
        }
        (1..=self.board.columns())
            .filter_map(Column::new)
            .filter(|&column| !self.board.is_full(column))
            .collect()
    }

    /// Validate one raw line and apply it if it names a playable column.
    /// Rejected lines leave the board and the turn untouched.
    #[instrument(skip(self), fields(player = self.active_player().name()))]
    pub fn submit(&mut self, input: &str) -> Result<Turn, MoveRejection> {
        if self.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        match self.validator.classify(input, &self.board)? {
            MoveCommand::Terminate => {
                debug!("end token entered");
                Ok(Turn::Terminated)
            }
            MoveCommand::Play(column) => {
                // Validation already ruled out every failure of `play`
                let row = self
                    .drop_active(column)
                    .map_err(|_| MoveRejection::ColumnFull(column))?;
                Ok(Turn::Played {
                    column,
                    row,
                    result: self.result,
                })
            }
        }
    }

    /// Drop the active player's mark into `column` and return the new result.
    pub fn play(&mut self, column: Column) -> Result<GameResult, MoveError> {
        self.drop_active(column)?;
        Ok(self.result)
    }

    fn drop_active(&mut self, column: Column) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.active_player().mark();
        let row = self.board.place(column, mark)?;

        self.result = if let Some(side) = WinDetector::winner(&self.board, &self.players) {
            GameResult::Win(side)
        } else if self.board.is_board_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        };
        debug!(%column, row, %mark, result = ?self.result, "move applied");

        if self.result == GameResult::Ongoing {
            self.active = self.active.other();
        }

        Ok(row)
    }

    /// Empty the board for a new game started by `first`. Players and
    /// dimensions are kept.
    pub fn reset(&mut self, first: Side) {
        self.board.clear();
        self.active = first;
        self.result = GameResult::Ongoing;
    }
}
