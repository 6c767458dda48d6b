use std::fmt;

use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Window directions as (row step, col step): horizontal, vertical,
/// diagonal down-right and diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// A `rows x cols` grid. Row 0 is the top; pieces settle at the highest
/// empty row index of their column.
///
/// `Clone` is a deep copy, so a cloned board can be written freely without
/// touching the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column whose pieces earn the centre-control bonus
    pub fn centre_column(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Write a piece at `(row, col)`.
    ///
    /// No validation happens here: `row` must come from [`Board::next_open_row`]
    /// on a column accepted by [`Board::is_valid_move`]. Out-of-range
    /// coordinates panic.
    pub fn drop_piece(&mut self, row: usize, col: usize, player: Player) {
        assert!(col < self.cols, "column {col} out of range");
        self.cells[row * self.cols + col] = player.to_cell();
    }

    /// True if `col` is on the board and its top cell is empty
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` when the column is full
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.get(0, col) != Cell::Empty)
    }

    /// Columns that still accept a piece, in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// An independent copy of this board with `player`'s piece dropped into
    /// `col`, or `None` if the column cannot take it. `self` is untouched.
    pub fn with_move(&self, col: usize, player: Player) -> Option<Board> {
        if !self.is_valid_move(col) {
            return None;
        }
        let row = self.next_open_row(col)?;
        let mut next = self.clone();
        next.drop_piece(row, col, player);
        Some(next)
    }

    /// Check whether `player` owns four aligned cells anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        let target = player.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// Every run of [`WIN_LENGTH`] cells in all four directions.
    ///
    /// Each window is yielded exactly once, so callers can sum over them.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WIN_LENGTH]> + '_ {
        DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.cols).filter_map(move |col| self.window(row, col, dr, dc))
            })
        })
    }

    fn window(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; WIN_LENGTH]> {
        let span = (WIN_LENGTH - 1) as isize;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if end_row < 0
            || end_row >= self.rows as isize
            || end_col < 0
            || end_col >= self.cols as isize
        {
            return None;
        }

        let mut window = [Cell::Empty; WIN_LENGTH];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            *slot = self.get(r, c);
        }
        Some(window)
    }

    /// Build a board from text rows, top row first: `.` empty, `1`/`2` players.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(rows.len(), cols);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), cols, "ragged row {row}");
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '1' => board.drop_piece(row, col, Player::One),
                    '2' => board.drop_piece(row, col, Player::Two),
                    other => panic!("unexpected cell '{other}'"),
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
