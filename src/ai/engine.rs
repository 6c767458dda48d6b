use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{Board, Player, DEFAULT_COLS, DEFAULT_ROWS};

use super::blocking;
use super::difficulty::Difficulty;
use super::heuristic::Heuristic;
use super::minimax::{MinimaxSearch, DEFAULT_DEPTH};
use super::random::RandomStrategy;

/// The computer opponent.
///
/// Bound to one board layout and one player id for its whole life; the
/// difficulty is chosen per call. Boards passed in are only ever read.
pub struct DecisionEngine {
    rows: usize,
    cols: usize,
    random: RandomStrategy,
    search: MinimaxSearch,
}

impl DecisionEngine {
    /// Engine for a `rows x cols` board playing as player two, searching
    /// [`DEFAULT_DEPTH`] plies.
    pub fn new(rows: usize, cols: usize) -> Self {
        DecisionEngine {
            rows,
            cols,
            random: RandomStrategy::new(),
            search: MinimaxSearch::new(Player::Two, DEFAULT_DEPTH),
        }
    }

    /// Build an engine from the `[board]` and `[engine]` config sections.
    /// The config is validated first.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = config
            .engine
            .player()
            .ok_or_else(|| ConfigError::Validation("engine.player must be 1 or 2".into()))?;

        let mut engine = DecisionEngine::new(config.board.rows, config.board.cols)
            .with_player(player)
            .with_depth(config.engine.depth);
        if let Some(seed) = config.engine.seed {
            engine = engine.with_seed(seed);
        }
        Ok(engine)
    }

    pub fn with_player(self, player: Player) -> Self {
        let depth = self.search.depth();
        DecisionEngine {
            search: MinimaxSearch::new(player, depth),
            ..self
        }
    }

    pub fn with_depth(self, depth: usize) -> Self {
        let player = self.search.player();
        DecisionEngine {
            search: MinimaxSearch::new(player, depth),
            ..self
        }
    }

    /// Seed the random fallback so easy/medium play is reproducible
    pub fn with_seed(self, seed: u64) -> Self {
        DecisionEngine {
            random: RandomStrategy::with_seed(seed),
            ..self
        }
    }

    /// Swap the leaf evaluator used by hard difficulty
    pub fn with_heuristic(self, heuristic: Box<dyn Heuristic>) -> Self {
        let search = MinimaxSearch::with_heuristic(self.search.player(), self.search.depth(), heuristic);
        DecisionEngine { search, ..self }
    }

    /// The id this engine plays (the maximising side).
    pub fn player(&self) -> Player {
        self.search.player()
    }

    pub fn depth(&self) -> usize {
        self.search.depth()
    }

    /// Pick a column for the engine on `board`.
    ///
    /// Returns `None` only when no column can take a piece.
    pub fn select_move(&mut self, difficulty: Difficulty, board: &Board) -> Option<usize> {
        debug_assert_eq!(
            (board.rows(), board.cols()),
            (self.rows, self.cols),
            "board layout differs from the one the engine was built for"
        );

        if board.valid_locations().is_empty() {
            return None;
        }

        match difficulty {
            Difficulty::Easy => self.random.choose(board),
            Difficulty::Medium => {
                blocking::tactical_move(board, self.player()).or_else(|| self.random.choose(board))
            }
            Difficulty::Hard => self.search.best_move(board),
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DecisionEngine {
        DecisionEngine::default().with_seed(11)
    }

    #[test]
    fn defaults() {
        let engine = DecisionEngine::default();
        assert_eq!(engine.player(), Player::Two);
        assert_eq!(engine.depth(), 4);
    }

    #[test]
    fn builder_keeps_other_settings() {
        let engine = DecisionEngine::default()
            .with_depth(2)
            .with_player(Player::One)
            .with_seed(1);
        assert_eq!(engine.player(), Player::One);
        assert_eq!(engine.depth(), 2);
    }

    #[test]
    fn easy_returns_valid_columns() {
        let mut engine = engine();
        let board = Board::from_rows(&[
            "1.2.1.2",
            "2.1.2.1",
            "1.2.1.2",
            "2.1.2.1",
            "1.2.1.2",
            "2.1.2.1",
        ]);
        for _ in 0..100 {
            let col = engine.select_move(Difficulty::Easy, &board).unwrap();
            assert!(board.valid_locations().contains(&col));
        }
    }

    #[test]
    fn medium_takes_the_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "....1..",
            "..2221.",
        ]);
        assert_eq!(engine().select_move(Difficulty::Medium, &board), Some(1));
    }

    #[test]
    fn medium_blocks() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "......2",
            "111...2",
        ]);
        assert_eq!(engine().select_move(Difficulty::Medium, &board), Some(3));
    }

    #[test]
    fn medium_falls_back_to_a_valid_column() {
        let mut engine = engine();
        let board = Board::default();
        for _ in 0..50 {
            let col = engine.select_move(Difficulty::Medium, &board).unwrap();
            assert!(col < 7);
        }
    }

    #[test]
    fn hard_uses_configured_player() {
        // Threat belongs to Two; an engine playing One must block it
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "......1",
            "222...1",
        ]);
        let mut engine = DecisionEngine::default().with_player(Player::One);
        assert_eq!(engine.select_move(Difficulty::Hard, &board), Some(3));
    }

    #[test]
    fn select_move_never_mutates() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "...1...",
            "..122..",
            ".21121.",
        ]);
        let snapshot = board.clone();
        let mut engine = engine();
        for difficulty in Difficulty::ALL {
            engine.select_move(difficulty, &board);
            assert_eq!(board, snapshot, "{difficulty} changed the board");
        }
    }

    #[test]
    fn full_board_yields_no_move() {
        let board = Board::from_rows(&["1212", "2121"]);
        let mut engine = DecisionEngine::new(2, 4);
        for difficulty in Difficulty::ALL {
            assert_eq!(engine.select_move(difficulty, &board), None);
        }
    }

    #[test]
    fn from_config_applies_engine_section() {
        let mut config = AppConfig::default();
        config.engine.player = 1;
        config.engine.depth = 2;
        config.engine.seed = Some(5);
        let engine = DecisionEngine::from_config(&config).unwrap();
        assert_eq!(engine.player(), Player::One);
        assert_eq!(engine.depth(), 2);
    }

    #[test]
    fn from_config_rejects_unknown_player_id() {
        let mut config = AppConfig::default();
        config.engine.player = 7;
        assert!(matches!(
            DecisionEngine::from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
