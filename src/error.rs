use std::path::PathBuf;

use crate::game::{Column, MAX_SIZE, MIN_SIZE};

/// Reasons a move line is turned down. The display text is what the player
/// is shown before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("Incorrect column number")]
    InvalidFormat,

    #[error("The column number is out of range (1 - {columns})")]
    OutOfRange { columns: usize },

    #[error("Column {0} is full")]
    ColumnFull(Column),

    #[error("The game is already over")]
    GameOver,
}

/// Errors from parsing a `RowsxColumns` board size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Invalid input")]
    InvalidFormat,

    #[error("Board rows should be from {min} to {max}", min = MIN_SIZE, max = MAX_SIZE)]
    RowsOutOfRange(usize),

    #[error("Board columns should be from {min} to {max}", min = MIN_SIZE, max = MAX_SIZE)]
    ColumnsOutOfRange(usize),
}

/// The number of games was not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input")]
pub struct GameCountError(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that stop a running session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("players need distinct marks, both use '{0}'")]
    DuplicateMark(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
