//! One-ply tactics: take an immediate win, otherwise stop the opponent's.

use crate::game::{Board, Player};

/// First column (ascending) where `player` wins by dropping a piece now.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    board.valid_locations().into_iter().find(|&col| {
        board
            .with_move(col, player)
            .is_some_and(|next| next.check_win(player))
    })
}

/// Own winning column if there is one, otherwise the first column the
/// opponent would win with on its next move.
pub fn tactical_move(board: &Board, player: Player) -> Option<usize> {
    winning_move(board, player).or_else(|| winning_move(board, player.other()))
}
