use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Picks uniformly at random from the legal columns.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a column, or `None` if the board is full
    pub fn choose(&mut self, board: &Board) -> Option<usize> {
        let columns = board.valid_locations();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}
