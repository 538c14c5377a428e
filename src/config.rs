use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{
    Dimensions, Mark, MoveValidator, DEFAULT_COLUMNS, DEFAULT_END_TOKEN, DEFAULT_ROWS,
};
use crate::session::StartPolicy;

/// Board size offered as the default at the dimension prompt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_mark: Mark,
    pub second_mark: Mark,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_mark: Mark::new('o'),
            second_mark: Mark::new('*'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub start_policy: StartPolicy,
    pub end_token: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_policy: StartPolicy::default(),
            end_token: DEFAULT_END_TOKEN.to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Dimensions::new(self.board.rows, self.board.columns)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))?;

        for (key, mark) in [
            ("players.first_mark", self.players.first_mark),
            ("players.second_mark", self.players.second_mark),
        ] {
            if mark.symbol().is_whitespace() {
                return Err(ConfigError::Validation(format!(
                    "{key} must not be whitespace"
                )));
            }
        }
        if self.players.first_mark == self.players.second_mark {
            return Err(ConfigError::Validation(
                "players.first_mark and players.second_mark must differ".into(),
            ));
        }

        let token = &self.session.end_token;
        if token.is_empty() || token.trim() != token {
            return Err(ConfigError::Validation(
                "session.end_token must be non-empty without surrounding whitespace".into(),
            ));
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "session.end_token must not be a column number".into(),
            ));
        }

        Ok(())
    }

    /// Default board size. Only valid after `validate` succeeded.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.board.rows, self.board.columns)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))
    }

    pub fn validator(&self) -> MoveValidator {
        MoveValidator::new(self.session.end_token.clone())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
