//! # Match Controllers
//!
//! A controller owns the authoritative board of one match and plays the role
//! the boards deliberately leave to their caller:
//!
//! - validating untrusted input before it reaches a board
//! - alternating turns
//! - deciding when the match is over (including the connect-four draw the
//!   board itself never reports)
//! - keeping a move history that can be printed
//!
//! ```text
//! ┌──────────────┐  column / cell  ┌──────────────┐  drop / place  ┌────────────┐
//! │ CLI / caller │ ──────────────► │  Controller  │ ─────────────► │   Board    │
//! │              │ ◄────────────── │ status, hist │ ◄───────────── │            │
//! └──────────────┘    report       └──────┬───────┘    Outcome     └────────────┘
//!                                         │ best_move (tic-tac-toe only)
//!                                         ▼
//!                                  ┌──────────────┐
//!                                  │ SearchEngine │
//!                                  └──────────────┘
//! ```

pub mod connect4;
pub mod tictactoe;

pub use connect4::Connect4Match;
pub use tictactoe::TicTacToeMatch;

use std::fmt;
use std::time::SystemTime;

/// Current game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<P> {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winner
    Win(P),
    /// Game ended in a draw
    Draw,
}

impl<P> GameStatus<P> {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single entry in the move history
#[derive(Debug, Clone)]
pub struct MoveHistoryEntry<P, M> {
    /// When the move was made
    pub timestamp: SystemTime,
    /// Player who made the move
    pub player: P,
    /// The move that was made
    pub move_made: M,
    /// Move number (1-indexed)
    pub move_number: usize,
}

impl<P, M> MoveHistoryEntry<P, M> {
    /// Create a new move history entry
    pub fn new(player: P, move_made: M, move_number: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_made,
            move_number,
        }
    }
}

/// Formats a move history with a trailing result line
pub(crate) fn format_history<P: fmt::Display, M: fmt::Display>(
    game_name: &str,
    history: &[MoveHistoryEntry<P, M>],
    status: GameStatus<P>,
    to_move: P,
) -> String {
    if history.is_empty() {
        return String::from("No moves made yet.");
    }

    let mut output = format!("=== {} Game History ===\n\n", game_name);

    for entry in history {
        output.push_str(&format!(
            "{}. {} - {}\n",
            entry.move_number, entry.player, entry.move_made
        ));
    }

    match status {
        GameStatus::Win(winner) => {
            output.push_str(&format!("\nResult: {} wins!\n", winner));
        }
        GameStatus::Draw => {
            output.push_str("\nResult: Draw\n");
        }
        GameStatus::InProgress => {
            output.push_str(&format!("\n(Game in progress - {} to move)\n", to_move));
        }
    }

    output
}
