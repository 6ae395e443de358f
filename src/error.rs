use std::path::PathBuf;

use crate::game::COLS;

/// A rejected game action. The display text is what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Column must be between 0 and {last}!", last = COLS - 1)]
    InvalidColumn,

    #[error("That column is full!")]
    ColumnFull { column: usize },

    #[error("No moves to undo!")]
    NothingToUndo,

    #[error("The game is over! UNDO the last move or start a NEW game.")]
    GameOver,
}

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
