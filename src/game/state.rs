use super::{Board, Player, DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Live game: the one place that writes to the real board and tracks turns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state; player one opens
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Start over on the same board
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.outcome = None;
    }

    /// Drop the current player's piece into `column` and pass the turn.
    /// Returns the row the piece landed on.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.cols() {
            return Err(MoveError::InvalidColumn(column));
        }
        if !self.board.is_valid_move(column) {
            return Err(MoveError::ColumnFull(column));
        }
        let row = self
            .board
            .next_open_row(column)
            .ok_or(MoveError::ColumnFull(column))?;

        self.board.drop_piece(row, column, self.current_player);

        if self.board.check_win(self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.board().valid_locations().len(), 7);
    }

    #[test]
    fn test_default_is_standard_board() {
        let state = GameState::default();
        assert_eq!(state, GameState::new(DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!((state.board().rows(), state.board().cols()), (6, 7));
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::default();
        let row = state.apply_move(3).unwrap();

        assert_eq!(row, 5);
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().get(5, 3), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_rejects_bad_columns() {
        let mut state = GameState::default();
        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn(7)));
        for _ in 0..6 {
            state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
        // A rejected move keeps the turn
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::default();

        // One wins with horizontal line
        for col in 0..4 {
            state.apply_move(col).unwrap(); // One
            if col < 3 {
                state.apply_move(col).unwrap(); // Two (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::default();

        // Every column alternates; column 3 is offset by one so no row or
        // diagonal lines up.
        let mut order = vec![3; 5];
        for col in [0, 1, 2, 4, 5, 6] {
            order.extend([col; 6]);
        }
        order.push(3);
        for col in order {
            state.apply_move(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::default();
        state.apply_move(2).unwrap();
        state.reset();
        assert_eq!(state, GameState::default());
    }
}
