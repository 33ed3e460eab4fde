//! Error types shared by the boards, the search engine and the controllers.
//!
//! Rejected moves are ordinary values the caller is expected to handle.
//! Contract violations (out-of-range coordinates handed straight to a board,
//! searching a full board) are not represented here; those panic.

use thiserror::Error;

/// Placing a mark on an occupied tic-tac-toe cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },
}

/// Text that does not describe a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected a non-negative number, got {0:?}")]
    NotANumber(String),
    #[error("cell {0} is out of range (0-8)")]
    CellOutOfRange(usize),
}

/// Move rejected by a match controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameAlreadyOver,
    #[error("column {column} is out of range (0-{max})")]
    ColumnOutOfRange { column: usize, max: usize },
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error(transparent)]
    Parse(#[from] ParseMoveError),
}

/// Failure to set up the search engine
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
