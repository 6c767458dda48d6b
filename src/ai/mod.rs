pub mod blocking;
mod difficulty;
mod engine;
pub mod heuristic;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use engine::DecisionEngine;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxSearch, DEFAULT_DEPTH, WIN_SCORE};
pub use random::RandomStrategy;
