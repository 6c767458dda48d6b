use std::path::PathBuf;

/// Reasons the live game refuses a requested move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is not on the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// A difficulty name that is not `easy`, `medium` or `hard`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy', 'medium', or 'hard')")]
pub struct ParseDifficultyError(pub String);

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
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is not on the board"
        );
    }

    #[test]
    fn test_parse_difficulty_error_display() {
        let err = ParseDifficultyError("brutal".to_string());
        assert_eq!(
            err.to_string(),
            "unknown difficulty 'brutal' (expected 'easy', 'medium', or 'hard')"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 1"
        );
    }
}
