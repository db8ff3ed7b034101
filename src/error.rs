use std::path::PathBuf;

/// Errors from applying or retracting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} has no piece to remove")]
    ColumnEmpty(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from move computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("no legal move: the board is full")]
    NoLegalMove,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is outside the board"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_ai_error_display() {
        assert_eq!(
            AiError::NoLegalMove.to_string(),
            "no legal move: the board is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.easy_depth must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.easy_depth must be > 0"
        );
    }
}
