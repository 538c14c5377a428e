use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use tracing::{debug, info};

use super::input::{parse_dimensions, parse_game_count};
use super::{GameSession, Score};
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{Dimensions, GameResult, Player, Players, Side, Turn};

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: Score,
    /// Games that reached a win or a draw.
    pub games_completed: u32,
    /// True if the end token (or end of input) stopped the session early.
    pub terminated: bool,
}

/// Outcome of one game as seen by the controller.
enum GameEnd {
    Finished,
    Terminated,
}

/// Drives a whole session over line-based text: asks for players, board
/// size and game count, then runs the games and prints the board and score.
pub struct SessionController<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> SessionController<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        SessionController {
            input,
            output,
            config,
        }
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the full session: setup prompts, every game, final message.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "Connect Four")?;

        let players = self.read_players()?;
        let dimensions = self.read_dimensions()?;
        let games = self.read_game_count()?;

        let mut session = GameSession::new(
            dimensions,
            players,
            self.config.validator(),
            games,
            self.config.session.start_policy,
        );
        info!(%dimensions, games = games.get(), "session started");

        let summary = self.play_session(&mut session)?;
        writeln!(self.output, "Game over!")?;
        self.output.flush()?;

        info!(?summary, "session finished");
        Ok(summary)
    }

    fn play_session(&mut self, session: &mut GameSession) -> Result<SessionSummary, SessionError> {
        let players = session.players().clone();
        writeln!(
            self.output,
            "{} VS {}",
            players.get(Side::One).name(),
            players.get(Side::Two).name()
        )?;
        writeln!(self.output, "{} board", session.engine().board().dimensions())?;
        if session.is_single_game() {
            writeln!(self.output, "Single game")?;
        } else {
            writeln!(self.output, "Total {} games", session.games())?;
        }

        let mut games_completed = 0;
        loop {
            if !session.is_single_game() {
                writeln!(self.output, "Game #{}", session.game_number())?;
            }
            write!(self.output, "{}", session.engine().board())?;

            match self.play_game(session)? {
                GameEnd::Terminated => {
                    return Ok(SessionSummary {
                        score: session.score(),
                        games_completed,
                        terminated: true,
                    });
                }
                GameEnd::Finished => {
                    session.finish_game();
                    games_completed += 1;
                }
            }

            if !session.is_single_game() {
                self.show_score(session)?;
            }
            if !session.start_next_game() {
                break;
            }
        }

        Ok(SessionSummary {
            score: session.score(),
            games_completed,
            terminated: false,
        })
    }

    /// Prompt for moves until the game is won, drawn or abandoned.
    fn play_game(&mut self, session: &mut GameSession) -> Result<GameEnd, SessionError> {
        loop {
            let name = session.engine().active_player().name().to_string();
            writeln!(self.output, "{name}'s turn:")?;

            let Some(line) = self.read_line()? else {
                debug!("input closed during a game");
                return Ok(GameEnd::Terminated);
            };

            match session.submit(&line) {
                Err(rejection) => {
                    debug!(%rejection, input = %line, "move rejected");
                    writeln!(self.output, "{rejection}")?;
                }
                Ok(Turn::Terminated) => return Ok(GameEnd::Terminated),
                Ok(Turn::Played { result, .. }) => {
                    write!(self.output, "{}", session.engine().board())?;
                    match result {
                        GameResult::Win(side) => {
                            let winner = session.players().get(side).name();
                            writeln!(self.output, "Player {winner} won")?;
                            return Ok(GameEnd::Finished);
                        }
                        GameResult::Draw => {
                            writeln!(self.output, "It is a draw")?;
                            return Ok(GameEnd::Finished);
                        }
                        GameResult::Ongoing => {}
                    }
                }
            }
        }
    }

    fn show_score(&mut self, session: &GameSession) -> Result<(), SessionError> {
        let players = session.players();
        let score = session.score();
        writeln!(self.output, "Score")?;
        writeln!(
            self.output,
            "{}: {} {}: {}",
            players.get(Side::One).name(),
            score.get(Side::One),
            players.get(Side::Two).name(),
            score.get(Side::Two)
        )?;
        Ok(())
    }

    fn read_players(&mut self) -> Result<Players, SessionError> {
        writeln!(self.output, "First player's name:")?;
        let first = self
            .read_line()?
            .ok_or(SessionError::InputClosed("the first player's name"))?;
        writeln!(self.output, "Second player's name:")?;
        let second = self
            .read_line()?
            .ok_or(SessionError::InputClosed("the second player's name"))?;

        let marks = &self.config.players;
        Players::new(
            Player::new(first, marks.first_mark),
            Player::new(second, marks.second_mark),
        )
        .ok_or(SessionError::DuplicateMark(marks.first_mark.symbol()))
    }

    fn read_dimensions(&mut self) -> Result<Dimensions, SessionError> {
        let defaults = Dimensions::new(self.config.board.rows, self.config.board.columns)
            .unwrap_or_default();
        loop {
            writeln!(self.output, "Set the board dimensions (Rows x Columns)")?;
            writeln!(
                self.output,
                "Press Enter for default ({} x {})",
                defaults.rows(),
                defaults.columns()
            )?;
            let line = self
                .read_line()?
                .ok_or(SessionError::InputClosed("the board dimensions"))?;

            match parse_dimensions(&line) {
                Ok(Some(dimensions)) => return Ok(dimensions),
                Ok(None) => return Ok(defaults),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn read_game_count(&mut self) -> Result<NonZeroU32, SessionError> {
        loop {
            writeln!(self.output, "Do you want to play single or multiple games?")?;
            writeln!(self.output, "For a single game, input 1 or press Enter")?;
            writeln!(self.output, "Input a number of games:")?;
            let line = self
                .read_line()?
                .ok_or(SessionError::InputClosed("the number of games"))?;

            match parse_game_count(&line) {
                Ok(games) => return Ok(games),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<SessionSummary, SessionError>, String) {
        run_with(script, AppConfig::default())
    }

    fn run_with(
        script: &str,
        config: AppConfig,
    ) -> (Result<SessionSummary, SessionError>, String) {
        let mut controller = SessionController::new(Cursor::new(script), Vec::new(), config);
        let result = controller.run();
        let output = String::from_utf8(controller.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_single_game_transcript() {
        let (result, output) = run("Anna\nBen\n\n\n1\n5\n2\n5\n3\n5\n4\n");
        let summary = result.unwrap();

        assert!(!summary.terminated);
        assert_eq!(summary.games_completed, 1);
        assert_eq!(summary.score.get(Side::One), 2);

        assert!(output.starts_with("Connect Four\nFirst player's name:\n"));
        assert!(output.contains("Anna VS Ben\n6 X 7 board\nSingle game\n"));
        assert!(output.contains("Anna's turn:\n"));
        assert!(output.contains("Ben's turn:\n"));
        assert!(output.contains("║o║o║o║o║*║ ║ ║\n"));
        assert!(output.ends_with("Player Anna won\nGame over!\n"));
        // Single games never print the score
        assert!(!output.contains("Score"));
    }

    #[test]
    fn test_rejections_are_reported_and_reprompted() {
        let (result, output) = run("A\nB\n5x5\n\nx\n0\n6\nend\n");
        let summary = result.unwrap();
        assert!(summary.terminated);

        assert!(output.contains("5 X 5 board"));
        assert!(output.contains("Incorrect column number\nA's turn:\n"));
        assert!(output.contains("The column number is out of range (1 - 5)\nA's turn:\n"));
        assert!(output.ends_with("A's turn:\nGame over!\n"));
    }

    #[test]
    fn test_column_full_message() {
        let (_, output) = run("A\nB\n\n\n1\n1\n1\n1\n1\n1\n1\nend\n");
        assert!(output.contains("Column 1 is full\nA's turn:\n"));
    }

    #[test]
    fn test_dimension_prompt_loops_until_valid() {
        let (result, output) = run("A\nB\n4x7\n6x10\nbig\n7x9\n\nend\n");
        assert!(result.is_ok());
        assert!(output.contains("Board rows should be from 5 to 9\n"));
        assert!(output.contains("Board columns should be from 5 to 9\n"));
        assert!(output.contains("Invalid input\n"));
        assert!(output.contains("7 X 9 board"));
        assert_eq!(output.matches("Set the board dimensions").count(), 4);
    }

    #[test]
    fn test_configured_default_dimensions() {
        let mut config = AppConfig::default();
        config.board.rows = 5;
        config.board.columns = 8;
        let (_, output) = run_with("A\nB\n\n\nend\n", config);
        assert!(output.contains("Press Enter for default (5 x 8)\n"));
        assert!(output.contains("5 X 8 board"));
    }

    #[test]
    fn test_game_count_prompt_rejects_zero() {
        let (result, output) = run("A\nB\n\n0\n2\nend\n");
        assert!(result.is_ok());
        assert!(output.contains("Input a number of games:\nInvalid input\n"));
        assert!(output.contains("Total 2 games\nGame #1\n"));
    }

    #[test]
    fn test_end_of_input_during_setup_is_an_error() {
        let (result, _) = run("A\n");
        assert!(matches!(result, Err(SessionError::InputClosed(_))));
    }

    #[test]
    fn test_end_of_input_during_game_terminates() {
        let (result, output) = run("A\nB\n\n\n3\n");
        let summary = result.unwrap();
        assert!(summary.terminated);
        assert_eq!(summary.games_completed, 0);
        assert!(output.ends_with("B's turn:\nGame over!\n"));
    }

    #[test]
    fn test_custom_marks_are_rendered() {
        let mut config = AppConfig::default();
        config.players.first_mark = crate::game::Mark::new('X');
        config.players.second_mark = crate::game::Mark::new('O');
        let (_, output) = run_with("A\nB\n\n\n2\n2\nend\n", config);
        assert!(output.contains("║ ║O║ ║ ║ ║ ║ ║\n║ ║X║ ║ ║ ║ ║ ║\n"));
    }
}
