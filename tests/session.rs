//! Scripted end-to-end sessions driven through `SessionController`.

use std::io::Cursor;

use connect_four::config::AppConfig;
use connect_four::game::Side;
use connect_four::session::{SessionController, SessionSummary, StartPolicy};

fn play(lines: &[&str], config: AppConfig) -> (SessionSummary, String) {
    let mut script = lines.join("\n");
    script.push('\n');
    let mut controller = SessionController::new(Cursor::new(script), Vec::new(), config);
    let summary = controller.run().expect("session should finish");
    let transcript = String::from_utf8(controller.into_output()).unwrap();
    (summary, transcript)
}

const ROW_WIN_FOR_FIRST: [&str; 7] = ["1", "5", "2", "5", "3", "5", "4"];
const COLUMN_WIN_FOR_SECOND: [&str; 8] = ["1", "2", "1", "2", "1", "2", "7", "2"];

/// Fills a 6x6 board without any four in a row.
fn draw_moves() -> Vec<&'static str> {
    let mut moves = Vec::new();
    for (a, b) in [("1", "2"), ("3", "4"), ("5", "6")] {
        moves.extend([a, b, a, b, b, a, b, a, a, b, a, b]);
    }
    moves
}

#[test]
fn test_two_games_keep_running_score() {
    let mut lines = vec!["Anna", "Ben", "", "2"];
    lines.extend(ROW_WIN_FOR_FIRST);
    lines.extend(COLUMN_WIN_FOR_SECOND);
    let (summary, transcript) = play(&lines, AppConfig::default());

    assert_eq!(summary.games_completed, 2);
    assert!(!summary.terminated);
    assert_eq!(summary.score.get(Side::One), 2);
    assert_eq!(summary.score.get(Side::Two), 2);

    assert!(transcript.contains("Total 2 games\nGame #1\n"));
    assert!(transcript.contains("Player Anna won\nScore\nAnna: 2 Ben: 0\nGame #2\n"));
    assert!(transcript.ends_with("Player Ben won\nScore\nAnna: 2 Ben: 2\nGame over!\n"));
}

#[test]
fn test_board_is_empty_again_for_next_game() {
    let mut lines = vec!["A", "B", "", "2"];
    lines.extend(ROW_WIN_FOR_FIRST);
    lines.push("end");
    let (_, transcript) = play(&lines, AppConfig::default());

    let empty_board = " 1 2 3 4 5 6 7\n".to_string()
        + &"║ ║ ║ ║ ║ ║ ║ ║\n".repeat(6)
        + "╚═╩═╩═╩═╩═╩═╩═╝\n";
    let game_two = transcript.split("Game #2\n").nth(1).unwrap();
    assert!(game_two.starts_with(&empty_board));
    assert!(game_two.ends_with("A's turn:\nGame over!\n"));
}

#[test]
fn test_draw_scores_one_point_each() {
    let mut lines = vec!["A", "B", "6x6", "2"];
    lines.extend(draw_moves());
    lines.push("end");
    let (summary, transcript) = play(&lines, AppConfig::default());

    assert!(summary.terminated);
    assert_eq!(summary.games_completed, 1);
    assert_eq!(summary.score.get(Side::One), 1);
    assert_eq!(summary.score.get(Side::Two), 1);
    assert!(transcript.contains("It is a draw\nScore\nA: 1 B: 1\nGame #2\n"));
    assert!(!transcript.contains("won"));
}

#[test]
fn test_alternate_policy_second_game_opened_by_player_two() {
    let mut config = AppConfig::default();
    config.session.start_policy = StartPolicy::Alternate;

    let mut lines = vec!["A", "B", "", "2"];
    lines.extend(ROW_WIN_FOR_FIRST);
    lines.push("end");
    let (_, transcript) = play(&lines, config);

    let game_two = transcript.split("Game #2\n").nth(1).unwrap();
    assert!(game_two.contains("╚═╩═╩═╩═╩═╩═╩═╝\nB's turn:\n"));
}

#[test]
fn test_player_one_policy_second_game_opened_by_player_one() {
    let mut lines = vec!["A", "B", "", "2"];
    lines.extend(ROW_WIN_FOR_FIRST);
    lines.push("end");
    let (_, transcript) = play(&lines, AppConfig::default());

    let game_two = transcript.split("Game #2\n").nth(1).unwrap();
    assert!(game_two.contains("╚═╩═╩═╩═╩═╩═╩═╝\nA's turn:\n"));
}

#[test]
fn test_end_token_stops_remaining_games() {
    let lines = ["A", "B", "", "3", "4", "end"];
    let (summary, transcript) = play(&lines, AppConfig::default());

    assert!(summary.terminated);
    assert_eq!(summary.games_completed, 0);
    assert!(!transcript.contains("Game #2"));
    assert!(!transcript.contains("Score"));
}

#[test]
fn test_rejected_moves_keep_the_turn() {
    let lines = ["A", "B", "", "", "9", "abc", "", "2", "end"];
    let (_, transcript) = play(&lines, AppConfig::default());

    let turns: Vec<&str> = transcript
        .lines()
        .filter(|line| line.ends_with("'s turn:"))
        .collect();
    assert_eq!(turns, ["A's turn:", "A's turn:", "A's turn:", "A's turn:", "B's turn:"]);
}
