use std::num::NonZeroU32;

use crate::error::{DimensionError, GameCountError};
use crate::game::Dimensions;

/// Parse a board size such as `6x7` or `8 X 5`. Whitespace anywhere is
/// ignored. An empty line means "keep the defaults" and yields `None`.
pub fn parse_dimensions(input: &str) -> Result<Option<Dimensions>, DimensionError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let (rows, columns) = compact
        .split_once(['x', 'X'])
        .filter(|(rows, columns)| is_number(rows) && is_number(columns))
        .ok_or(DimensionError::InvalidFormat)?;

    // Only digits are left, so parsing can fail on overflow alone
    let rows = rows.parse().unwrap_or(usize::MAX);
    let columns = columns.parse().unwrap_or(usize::MAX);
    Dimensions::new(rows, columns).map(Some)
}

/// Parse the number of games to play. An empty line means a single game;
/// zero is rejected.
pub fn parse_game_count(input: &str) -> Result<NonZeroU32, GameCountError> {
    let input = input.trim_end_matches(['\r', '\n']);
    if input.is_empty() {
        return Ok(NonZeroU32::MIN);
    }
    input
        .parse()
        .map_err(|_| GameCountError(input.to_string()))
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
