//! # Game Implementations Module
//!
//! This module contains the two board games supported by the engine.
//!
//! ## Supported Games
//! - **Connect 4**: Gravity-based connection game on a 6x7 grid for 2 players
//! - **Tic-Tac-Toe**: Fixed 3x3 board played by a human against the minimax AI
//!
//! Boards never track whose "real" turn it is beyond what a move needs; turn
//! alternation belongs to the caller (see `crate::controller`).

pub mod connect4;
pub mod tictactoe;

/// Result of applying a single move to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    /// The game goes on.
    Continue,
    /// The move completed a winning line for this player.
    Win(P),
    /// The board is full with no winner.
    Draw,
    /// The move was rejected and the board left unchanged.
    IllegalMove,
}

impl<P> Outcome<P> {
    /// True for `Win` and `Draw`.
    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Draw)
    }
}

/// Read-only grid view used by renderers and move history output.
pub trait BoardView {
    /// `(rows, cols)` of the board.
    fn dimensions(&self) -> (usize, usize);

    /// Single character for the cell at `(row, col)`; `'.'` when empty.
    fn symbol_at(&self, row: usize, col: usize) -> char;
}
