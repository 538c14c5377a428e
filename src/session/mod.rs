//! A run of consecutive games between the same two players on one board
//! size, with a running score.

mod controller;
mod input;

pub use controller::{SessionController, SessionSummary};
pub use input::{parse_dimensions, parse_game_count};

use std::num::NonZeroU32;

use tracing::info;

use crate::error::MoveRejection;
use crate::game::{Dimensions, GameEngine, GameResult, MoveValidator, Players, Side, Turn};

/// Points for winning a game.
pub const WIN_POINTS: u32 = 2;
/// Points each player gets for a draw.
pub const DRAW_POINTS: u32 = 1;

/// Who moves first in each game of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// Player one opens every game.
    #[default]
    PlayerOne,
    /// Player one opens game 1, player two game 2, and so on.
    Alternate,
}

impl StartPolicy {
    /// Opening side of the 1-based game `number`.
    pub fn first_side(self, number: u32) -> Side {
        match self {
            StartPolicy::PlayerOne => Side::One,
            StartPolicy::Alternate if number % 2 == 0 => Side::Two,
            StartPolicy::Alternate => Side::One,
        }
    }
}

/// Running totals, one counter per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    one: u32,
    two: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::One => self.one,
            Side::Two => self.two,
        }
    }

    /// Add the points for a finished game. `Ongoing` changes nothing.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Side::One) => self.one += WIN_POINTS,
            GameResult::Win(Side::Two) => self.two += WIN_POINTS,
            GameResult::Draw => {
                self.one += DRAW_POINTS;
                self.two += DRAW_POINTS;
            }
            GameResult::Ongoing => {}
        }
    }
}

/// Everything that lives for a whole session: the engine with its players
/// and board, the score, and where we are in the planned number of games.
///
/// Owned by the caller; there is no shared or global game state.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: GameEngine,
    score: Score,
    games: NonZeroU32,
    game_number: u32,
    start_policy: StartPolicy,
}

impl GameSession {
    /// Session positioned at the start of game 1.
    pub fn new(
        dimensions: Dimensions,
        players: Players,
        validator: MoveValidator,
        games: NonZeroU32,
        start_policy: StartPolicy,
    ) -> Self {
        let mut engine = GameEngine::new(dimensions, players, validator);
        engine.reset(start_policy.first_side(1));
        GameSession {
            engine,
            score: Score::default(),
            games,
            game_number: 1,
            start_policy,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn players(&self) -> &Players {
        self.engine.players()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of games the session was set up for.
    pub fn games(&self) -> u32 {
        self.games.get()
    }

    /// 1-based number of the current game.
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn is_single_game(&self) -> bool {
        self.games.get() == 1
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy
    }

    /// Feed one move line to the current game.
    pub fn submit(&mut self, input: &str) -> Result<Turn, MoveRejection> {
        self.engine.submit(input)
    }

    /// Credit the current game's result to the score and return it. Call
    /// once per finished game.
    pub fn finish_game(&mut self) -> GameResult {
        let result = self.engine.result();
        self.score.record(result);
        info!(
            game = self.game_number,
            ?result,
            score_one = self.score.one,
            score_two = self.score.two,
            "game finished"
        );
        result
    }

    pub fn has_next_game(&self) -> bool {
        self.game_number < self.games.get()
    }

    /// Clear the board and move on to the next game. Returns false when all
    /// planned games have been played.
    pub fn start_next_game(&mut self) -> bool {
        if !self.has_next_game() {
            return false;
        }
        self.game_number += 1;
        self.engine
            .reset(self.start_policy.first_side(self.game_number));
        true
    }
}
