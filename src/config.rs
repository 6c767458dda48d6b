use std::path::Path;

use crate::ai::{Difficulty, DEFAULT_DEPTH};
use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_COLS, DEFAULT_ROWS, WIN_LENGTH};

/// Largest board edge accepted from a config file.
pub const MAX_BOARD_EDGE: usize = 16;

/// Deepest search accepted from a config file; the search is synchronous.
pub const MAX_SEARCH_DEPTH: usize = 8;

/// Upper bound on the unpruned search tree, `cols ^ (depth + 1)` leaves.
pub const MAX_SEARCH_NODES: u64 = 10_000_000;

/// Deepest search allowed on a board `cols` wide.
///
/// Each root move is searched `depth` plies deeper, so a full tree has
/// `cols ^ (depth + 1)` leaves; wide boards get shallower searches.
pub fn max_search_depth(cols: usize) -> usize {
    let width = cols.max(1) as u64;
    (0..=MAX_SEARCH_DEPTH)
        .rev()
        .find(|&depth| width.saturating_pow(depth as u32 + 1) <= MAX_SEARCH_NODES)
        .unwrap_or(0)
}

/// Board layout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Plies searched below each root move on hard difficulty
    pub depth: usize,
    /// Player id (1 or 2) the engine plays; player 1 always opens
    pub player: u8,
    /// Seed for the random choices of easy and medium difficulty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// The engine's player, or `None` when `player` is not 1 or 2
    pub fn player(&self) -> Option<Player> {
        Player::from_id(self.player)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            difficulty: Difficulty::Easy,
            depth: DEFAULT_DEPTH,
            player: 2,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { rows, cols } = self.board;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be >= 1".into(),
            ));
        }
        if rows > MAX_BOARD_EDGE || cols > MAX_BOARD_EDGE {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.cols must be <= {MAX_BOARD_EDGE}"
            )));
        }
        if rows < WIN_LENGTH && cols < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must be at least {WIN_LENGTH} rows or {WIN_LENGTH} columns to allow a win"
            )));
        }

        let depth_limit = max_search_depth(cols);
        if self.engine.depth > depth_limit {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be <= {depth_limit} on a {cols}-column board"
            )));
        }
        if self.engine.player().is_none() {
            return Err(ConfigError::Validation(
                "engine.player must be 1 or 2".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.engine.depth, 4);
        assert_eq!(config.engine.difficulty, Difficulty::Easy);
        assert_eq!(config.engine.player(), Some(Player::Two));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
difficulty = "hard"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.difficulty, Difficulty::Hard);
        // Other fields should be defaults
        assert_eq!(config.engine.depth, 4);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_difficulty_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[engine]\ndifficulty = \"insane\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_empty_board() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.board.cols = MAX_BOARD_EDGE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        config.board.cols = 3;
        assert!(config.validate().is_err());

        config.board.cols = 4;
        config.validate().expect("3x4 board allows a horizontal win");
    }

    #[test]
    fn test_validation_rejects_deep_search() {
        let mut config = AppConfig::default();
        config.engine.depth = MAX_SEARCH_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_depth_limit_shrinks_with_width() {
        assert_eq!(max_search_depth(1), MAX_SEARCH_DEPTH);
        assert_eq!(max_search_depth(5), 8);
        assert_eq!(max_search_depth(7), 7);
        assert_eq!(max_search_depth(10), 6);
        assert_eq!(max_search_depth(16), 4);
    }

    #[test]
    fn test_validation_rejects_deep_search_on_wide_board() {
        let mut config = AppConfig::default();
        config.board.cols = MAX_BOARD_EDGE;
        config.engine.depth = 4;
        config.validate().expect("depth 4 fits a 16-column board");

        config.engine.depth = 5;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.board.cols = 7;
        config.engine.depth = 7;
        config.validate().expect("depth 7 fits a 7-column board");
        config.engine.depth = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_player() {
        let mut config = AppConfig::default();
        config.engine.player = 3;
        assert_eq!(config.engine.player(), None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 5
cols = 8

[engine]
difficulty = "medium"
player = 1
seed = 99
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board, BoardConfig { rows: 5, cols: 8 });
        assert_eq!(config.engine.difficulty, Difficulty::Medium);
        assert_eq!(config.engine.player(), Some(Player::One));
        assert_eq!(config.engine.seed, Some(99));
        // Others are defaults
        assert_eq!(config.engine.depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[engine]\nplayer = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let result = AppConfig::load(Path::new("definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
