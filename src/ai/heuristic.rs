//! Static evaluation of non-terminal positions.

use crate::game::{Board, Player, WIN_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

const CENTRE_PIECE: i32 = 3;
const OWN_FOUR: i32 = 100;
const OWN_THREE: i32 = 5;
const OWN_TWO: i32 = 2;
const OPPONENT_THREE: i32 = -4;

/// Default heuristic: a centre-column bonus plus a score for every 4-cell
/// window on the board.
///
/// Only the opponent's open threes are penalised; its twos and its centre
/// pieces count for nothing. The engine therefore plays for its own
/// patterns first and reacts to the opponent only near a threat.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = 0;

        if own == 4 {
            score += OWN_FOUR;
        } else if own == 3 && empty == 1 {
            score += OWN_THREE;
        } else if own == 2 && empty == 2 {
            score += OWN_TWO;
        }

        if opp == 3 && empty == 1 {
            score += OPPONENT_THREE;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        let centre = board.centre_column();
        let centre_count = (0..board.rows())
            .filter(|&row| board.get(row, centre) == own_cell)
            .count() as i32;
        let mut score = centre_count * CENTRE_PIECE;

        for window in board.windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in window {
                match cell {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            debug_assert_eq!(own + opp + empty, WIN_LENGTH);
            score += Self::score_window(own, opp, empty);
        }

        score
    }
}
