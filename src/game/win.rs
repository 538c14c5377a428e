//! Four-in-a-row detection by full board rescan.
//!
//! Every line of the board (each row, each column and every diagonal in both
//! directions) is walked cell by cell while tracking the current run of equal
//! marks. Lines are independent, so a run can never continue across a board
//! edge into the next line.

use tracing::debug;

use super::board::{Board, Mark};
use super::player::{Players, Side};

/// Length of the run that wins a game.
pub const WIN_LENGTH: usize = 4;

/// Orientation of a line of cells. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top along a column.
    Vertical,
    /// One column right and one row up per step (`/`).
    UpRight,
    /// One column right and one row down per step (`\`).
    DownRight,
}

impl Direction {
    /// Scan order; earlier directions win ties.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// (row, column) delta of one step.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::DownRight => (-1, 1),
        }
    }

    /// First cell of every line running in this direction.
    fn starts(self, rows: usize, columns: usize) -> Vec<(usize, usize)> {
        match self {
            Direction::Horizontal => (0..rows).map(|row| (row, 0)).collect(),
            Direction::Vertical => (0..columns).map(|column| (0, column)).collect(),
            Direction::UpRight => (1..rows)
                .rev()
                .map(|row| (row, 0))
                .chain((0..columns).map(|column| (0, column)))
                .collect(),
            Direction::DownRight => (0..rows - 1)
                .map(|row| (row, 0))
                .chain((0..columns).map(|column| (rows - 1, column)))
                .collect(),
        }
    }
}

/// A winning run: who made it, which way it runs and its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub side: Side,
    pub direction: Direction,
    /// 0-based (row, column) of the first cell of the run.
    pub start: (usize, usize),
}

pub struct WinDetector;

impl WinDetector {
    /// Side owning four marks in a row anywhere on the board.
    pub fn winner(board: &Board, players: &Players) -> Option<Side> {
        Self::find(board, players).map(|win| win.side)
    }

    /// Scan rows, then columns, then both diagonals. Within a single line,
    /// a run of player one is reported before one of player two.
    pub fn find(board: &Board, players: &Players) -> Option<Win> {
        for direction in Direction::ALL {
            for start in direction.starts(board.rows(), board.columns()) {
                if let Some((side, run_start)) = scan_line(board, start, direction, players) {
                    let win = Win {
                        side,
                        direction,
                        start: run_start,
                    };
                    debug!(?win, "four in a row");
                    return Some(win);
                }
            }
        }
        None
    }
}

/// Cells of one line, from `start` until it leaves the board.
fn line(
    board: &Board,
    start: (usize, usize),
    direction: Direction,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let (row_step, column_step) = direction.step();
    std::iter::successors(Some(start), move |&(row, column)| {
        let row = row.checked_add_signed(row_step)?;
        let column = column.checked_add_signed(column_step)?;
        (row < board.rows() && column < board.columns()).then_some((row, column))
    })
}

/// Run-length scan of one line. Marks that belong to neither player never
/// win.
fn scan_line(
    board: &Board,
    start: (usize, usize),
    direction: Direction,
    players: &Players,
) -> Option<(Side, (usize, usize))> {
    let mut first_one = None;
    let mut first_two = None;

    let mut run: Option<Mark> = None;
    let mut run_length = 0;
    let mut run_start = start;

    for (row, column) in line(board, start, direction) {
        match board.get(row, column).mark() {
            Some(mark) if run == Some(mark) => run_length += 1,
            Some(mark) => {
                run = Some(mark);
                run_length = 1;
                run_start = (row, column);
            }
            None => {
                run = None;
                run_length = 0;
            }
        }

        if run_length == WIN_LENGTH {
            match run.and_then(|mark| players.side_of(mark)) {
                Some(Side::One) => {
                    first_one.get_or_insert(run_start);
                }
                Some(Side::Two) => {
                    first_two.get_or_insert(run_start);
                }
                None => {}
            }
        }
    }

    first_one
        .map(|at| (Side::One, at))
        .or(first_two.map(|at| (Side::Two, at)))
}
