//! # board-duel
//!
//! Game logic for two independent two-player board games:
//!
//! - **Connect 4** ([`GravityBoard`]): pieces are dropped into columns and a
//!   win is detected incrementally from the piece just placed, using the
//!   direction-pair scan of the `line-scan` crate.
//! - **Tic-Tac-Toe** ([`FixedBoard`]): a human plays a perfect minimax
//!   opponent ([`SearchEngine`]).
//!
//! The boards are pure state holders: they accept a move, mutate, and report an
//! [`Outcome`]. Turn alternation and end-of-game bookkeeping live in the
//! [`controller`] module; rendering and input live in the binaries.
//!
//! ## Modules
//!
//! - `games`: the two boards, their moves and cell types
//! - `minimax`: exhaustive adversarial search for tic-tac-toe
//! - `controller`: match controllers driving turns and history
//! - `render`: colored terminal rendering of any board
//! - `error`: error types

pub mod controller;
pub mod error;
pub mod games;
pub mod minimax;
pub mod render;

pub use crate::controller::{Connect4Match, GameStatus, MoveHistoryEntry, TicTacToeMatch};
pub use crate::error::{MoveError, ParseMoveError, PlaceError, SearchError};
pub use crate::games::connect4::{Connect4Move, GravityBoard, Owner, Player};
pub use crate::games::tictactoe::{CellMove, FixedBoard, Mark, WINNING_LINES};
pub use crate::games::{BoardView, Outcome};
pub use crate::minimax::{best_move, SearchEngine, SearchStatistics};
