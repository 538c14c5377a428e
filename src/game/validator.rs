use tracing::trace;

use super::board::{Board, Column};
use crate::error::MoveRejection;

/// Token that ends the session from any move prompt.
pub const DEFAULT_END_TOKEN: &str = "end";

/// What an accepted line asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Terminate,
    Play(Column),
}

/// Checks raw move lines against the current board before anything is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveValidator {
    end_token: String,
}

impl MoveValidator {
    pub fn new(end_token: impl Into<String>) -> Self {
        MoveValidator {
            end_token: end_token.into(),
        }
    }

    pub fn end_token(&self) -> &str {
        &self.end_token
    }

    /// Classify one input line. Only the line terminator is stripped, so
    /// `" 3"` is a format error just like `"three"`.
    ///
    /// Checks run in order: end token, digits only, range, column full.
    pub fn classify(&self, input: &str, board: &Board) -> Result<MoveCommand, MoveRejection> {
        let input = input.trim_end_matches(['\r', '\n']);
        trace!(input, "classifying move");

        if input == self.end_token {
            return Ok(MoveCommand::Terminate);
        }

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoveRejection::InvalidFormat);
        }

        // Digits that overflow usize are out of range as well
        let column = input
            .parse::<usize>()
            .ok()
            .filter(|&n| board.is_in_range(n))
            .and_then(Column::new)
            .ok_or(MoveRejection::OutOfRange {
                columns: board.columns(),
            })?;

        if board.is_full(column) {
            return Err(MoveRejection::ColumnFull(column));
        }

        Ok(MoveCommand::Play(column))
    }
}

impl Default for MoveValidator {
    fn default() -> Self {
        Self::new(DEFAULT_END_TOKEN)
    }
}
