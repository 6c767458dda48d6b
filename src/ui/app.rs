use crate::ai::{DecisionEngine, Difficulty};
use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameOutcome, GameState, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::mode::GameMode;

/// One terminal game: two humans, or a human against the engine.
pub struct App {
    game_state: GameState,
    engine: DecisionEngine,
    mode: GameMode,
    difficulty: Difficulty,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, mode: GameMode) -> Result<Self, ConfigError> {
        let mut app = App {
            game_state: GameState::new(config.board.rows, config.board.cols),
            engine: DecisionEngine::from_config(config)?,
            mode,
            difficulty: config.engine.difficulty,
            selected_column: config.board.cols / 2, // Start in middle
            should_quit: false,
            message: None,
        };
        app.engine_turn();
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_turn(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.game_state.board().cols() {
                    self.selected_column = col;
                    self.human_turn(col);
                }
            }
            KeyCode::Char('e') => self.set_difficulty(Difficulty::Easy),
            KeyCode::Char('m') => self.set_difficulty(Difficulty::Medium),
            KeyCode::Char('h') => self.set_difficulty(Difficulty::Hard),
            KeyCode::Char('p') => {
                self.mode = self.mode.toggled();
                self.restart();
                self.message = Some(format!("{} - new game started!", self.mode));
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state.reset();
        self.selected_column = self.game_state.board().cols() / 2;
        self.engine_turn();
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.message = Some(format!("Difficulty set to {difficulty}"));
    }

    fn human_player(&self) -> Player {
        self.engine.player().other()
    }

    /// Drop the human's piece, then let the engine answer.
    /// In player-vs-player mode every move comes from the keyboard.
    fn human_turn(&mut self, column: usize) {
        if self.mode.uses_engine()
            && self.game_state.current_player() != self.human_player()
            && !self.game_state.is_terminal()
        {
            return;
        }

        match self.game_state.apply_move(column) {
            Ok(_) => {
                if !self.announce_outcome() {
                    self.engine_turn();
                }
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(format!("{err}!"));
            }
        }
    }

    /// Play the engine's move if it is the engine's turn
    fn engine_turn(&mut self) {
        if !self.mode.uses_engine()
            || self.game_state.is_terminal()
            || self.game_state.current_player() != self.engine.player()
        {
            return;
        }
        let Some(column) = self.engine.select_move(self.difficulty, self.game_state.board()) else {
            return;
        };
        if let Err(err) = self.game_state.apply_move(column) {
            self.message = Some(format!("Engine move rejected: {err}"));
            return;
        }
        self.announce_outcome();
    }

    /// Set the end-of-game message; true if the game just ended
    fn announce_outcome(&mut self) -> bool {
        let Some(outcome) = self.game_state.outcome() else {
            return false;
        };
        self.message = Some(match outcome {
            GameOutcome::Winner(player) if !self.mode.uses_engine() => {
                format!("{} wins!", player.name())
            }
            GameOutcome::Winner(player) if player == self.engine.player() => {
                format!("{} (computer) wins!", player.name())
            }
            GameOutcome::Winner(player) => format!("{} (you) win!", player.name()),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
        true
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.mode,
            self.difficulty,
        );
    }
}
