//! Engine-vs-engine matches, driven through [`GameState`] the same way the
//! interactive front end drives a game.

use serde::Serialize;

use crate::ai::{DecisionEngine, Difficulty};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};

/// One side of a match: an engine and the difficulty it plays at.
pub struct Contender {
    pub engine: DecisionEngine,
    pub difficulty: Difficulty,
}

impl Contender {
    /// Engine for `player` on a `rows x cols` board
    pub fn new(player: Player, difficulty: Difficulty, rows: usize, cols: usize, depth: usize) -> Self {
        Contender {
            engine: DecisionEngine::new(rows, cols).with_player(player).with_depth(depth),
            difficulty,
        }
    }

    pub fn seeded(self, seed: u64) -> Self {
        Contender {
            engine: self.engine.with_seed(seed),
            ..self
        }
    }
}

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Option<Player>,
    pub game_length: usize,
}

/// Play one game to the end. `first` must hold player one.
pub fn play_match(
    first: &mut Contender,
    second: &mut Contender,
    rows: usize,
    cols: usize,
) -> Result<MatchResult, MoveError> {
    debug_assert_eq!(first.engine.player(), Player::One);
    debug_assert_eq!(second.engine.player(), Player::Two);

    let mut state = GameState::new(rows, cols);
    let mut game_length = 0;

    while !state.is_terminal() {
        let side = match state.current_player() {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let Some(col) = side.engine.select_move(side.difficulty, state.board()) else {
            break;
        };
        state.apply_move(col)?;
        game_length += 1;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        Some(GameOutcome::Draw) | None => None,
    };

    Ok(MatchResult {
        winner,
        game_length,
    })
}

/// Running tally of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: MatchResult) {
        self.games += 1;
        self.total_moves += result.game_length;
        match result.winner {
            Some(Player::One) => self.first_wins += 1,
            Some(Player::Two) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Share of games won by player one.
    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_wins as f32 / self.games as f32
    }

    /// Share of games won by player two.
    pub fn second_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.second_wins as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}
