use crate::game::{Board, Player};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a position the engine has already won (negated when lost).
pub const WIN_SCORE: i32 = 100_000;

/// Plies searched below each root move unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 4;

/// Fixed-depth minimax with alpha-beta pruning.
///
/// `player` is always the maximiser and its opponent the minimiser, whatever
/// side is to move at a node. Every simulated move lands on a fresh board
/// copy, so the board handed to [`MinimaxSearch::best_move`] is only read.
pub struct MinimaxSearch {
    player: Player,
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxSearch {
    pub fn new(player: Player, depth: usize) -> Self {
        MinimaxSearch {
            player,
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(player: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch {
            player,
            depth,
            heuristic,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Best column for `player`, or `None` if the board is full.
    ///
    /// Each root move is followed by `depth` more plies. Ties keep the lower
    /// column, and the first legal column stands in when every move loses.
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        let legal = board.valid_locations();
        let mut best_action = *legal.first()?;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for &col in &legal {
            let Some(next) = board.with_move(col, self.player) else {
                continue;
            };
            let score = self.minimax(&next, self.depth, false, alpha, i32::MAX);
            if score > best_score {
                best_score = score;
                best_action = col;
            }
            // Later root moves only matter if they beat the best so far
            alpha = alpha.max(best_score);
        }

        Some(best_action)
    }

    fn minimax(&self, board: &Board, depth: usize, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        let opponent = self.player.other();

        if board.check_win(self.player) {
            return WIN_SCORE;
        }
        if board.check_win(opponent) {
            return -WIN_SCORE;
        }
        if depth == 0 || board.is_full() {
            return self.heuristic.evaluate(board, self.player);
        }

        if maximizing {
            let mut value = i32::MIN;
            for col in board.valid_locations() {
                let Some(next) = board.with_move(col, self.player) else {
                    continue;
                };
                value = value.max(self.minimax(&next, depth - 1, false, alpha, beta));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for col in board.valid_locations() {
                let Some(next) = board.with_move(col, opponent) else {
                    continue;
                };
                value = value.min(self.minimax(&next, depth - 1, true, alpha, beta));
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}
