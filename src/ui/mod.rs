//! Terminal UI: a single game view for two humans or a human against the computer.

mod app;
mod game_view;
mod mode;

pub use app::App;
pub use mode::GameMode;
