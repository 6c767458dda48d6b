//! # Connect Four Minimax
//!
//! Connect Four against a computer opponent. The opponent plays at three
//! levels: random, one-ply win/block tactics, and a fixed-depth minimax
//! search with alpha-beta pruning over a window-based heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board model, player labels, live game state
//! - [`ai`] — Decision engine: difficulty levels, search, heuristic
//! - [`arena`] — Engine-vs-engine matches and their statistics
//! - [`ui`] — Terminal UI: two humans, or a human against the engine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
