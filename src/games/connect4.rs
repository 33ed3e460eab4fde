//! # Connect 4 Game Implementation
//!
//! This module implements the gravity-drop connect-four board.
//! Players take turns dropping pieces into columns, trying to get 4 pieces
//! in a row (horizontally, vertically, or diagonally).
//!
//! ## Rules
//! - Pieces fall to the lowest available spot in the column due to gravity
//! - Dropping into a full column is rejected and leaves the board unchanged
//! - First player to get 4 pieces in a row through the piece just dropped wins
//!
//! The board never reports a draw on its own: a full board with no winner
//! keeps answering `Continue`, and callers check [`GravityBoard::is_full`].
//! It also never advances the turn; callers call [`GravityBoard::pass_turn`]
//! after a `Continue`.

use crate::error::ParseMoveError;
use crate::games::{BoardView, Outcome};
use line_scan::{has_run_through, Dims};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Number of pieces in a row needed to win
pub const WIN_LENGTH: usize = 4;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Owner of a single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Owner {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Owner {
    /// The player owning this cell, `None` when empty.
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Empty => None,
            Owner::PlayerA => Some(Player::A),
            Owner::PlayerB => Some(Player::B),
        }
    }
}

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Board symbol used in text output
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Owner::PlayerA,
            Player::B => Owner::PlayerB,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Represents a move in Connect 4
///
/// Contains the column number where a player wants to drop their piece.
/// Column numbers are 0-based indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Connect4Move(pub usize);

impl fmt::Display for Connect4Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl FromStr for Connect4Move {
    type Err = ParseMoveError;

    /// Creates a Connect4Move from a string representation
    ///
    /// Expected format is just the column number as a string. Range checking
    /// against a board happens where the board is known.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use duel::games::connect4::Connect4Move;
    /// let mv = Connect4Move::from_str("3").unwrap();
    /// assert_eq!(mv.0, 3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let c = trimmed
            .parse::<usize>()
            .map_err(|_| ParseMoveError::NotANumber(trimmed.to_string()))?;
        Ok(Connect4Move(c))
    }
}

/// The connect-four grid
///
/// Cells are stored row-major with row 0 at the top, so a piece dropped into
/// an empty column lands on row `rows - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityBoard {
    /// The game board as a flat vector (row-major)
    grid: Vec<Owner>,
    rows: usize,
    cols: usize,
    /// Player whose piece `drop` places next
    to_move: Player,
    /// Last piece placed, if any (row, column)
    last_drop: Option<(usize, usize)>,
}

impl Default for GravityBoard {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl GravityBoard {
    /// Creates an empty board with player A to move
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero, got {rows}x{cols}");
        Self {
            grid: vec![Owner::Empty; rows * cols],
            rows,
            cols,
            to_move: Player::A,
            last_drop: None,
        }
    }

    /// `(rows, cols)`, fixed at construction
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Player whose piece the next `drop` places
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Hands the move to the other player
    pub fn pass_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Last piece placed as `(row, column)`
    pub fn last_drop(&self) -> Option<(usize, usize)> {
        self.last_drop
    }

    /// Owner of the cell at `(row, col)`
    ///
    /// # Panics
    /// If the coordinates lie outside the board.
    pub fn owner(&self, row: usize, col: usize) -> Owner {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.grid[self.index(row, col)]
    }

    /// Row a piece dropped into `column` would land on, `None` if the column is full
    ///
    /// # Panics
    /// If `column` is out of range.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        self.assert_column(column);
        (0..self.rows)
            .rev()
            .find(|&r| self.grid[self.index(r, column)] == Owner::Empty)
    }

    /// Checks if a column can take another piece
    ///
    /// Out-of-range columns are simply not legal here; use this to validate
    /// untrusted input before calling [`GravityBoard::drop`].
    pub fn is_legal(&self, column: usize) -> bool {
        column < self.cols && self.grid[column] == Owner::Empty
    }

    /// Columns whose top cell is still empty, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&c| self.grid[c] == Owner::Empty).collect()
    }

    /// True when every column is full
    ///
    /// Gravity keeps every column contiguous, so the top row decides.
    pub fn is_full(&self) -> bool {
        self.grid[..self.cols].iter().all(|&o| o != Owner::Empty)
    }

    /// Drops a piece for the player to move
    ///
    /// # Returns
    /// `Win(player)` if the piece completes a run of four, `IllegalMove` if the
    /// column is full (board unchanged), otherwise `Continue`.
    ///
    /// # Panics
    /// If `column` is out of range.
    pub fn drop(&mut self, column: usize) -> Outcome<Player> {
        self.drop_as(column, self.to_move)
    }

    /// Drops a piece for an explicit player, ignoring whose turn it is
    ///
    /// # Panics
    /// If `column` is out of range.
    pub fn drop_as(&mut self, column: usize, player: Player) -> Outcome<Player> {
        let Some(row) = self.landing_row(column) else {
            debug!("column {column} is full");
            return Outcome::IllegalMove;
        };

        let idx = self.index(row, column);
        self.grid[idx] = player.into();
        self.last_drop = Some((row, column));

        if self.check_win(row, column) {
            debug!("{player} connects {WIN_LENGTH} through ({row}, {column})");
            Outcome::Win(player)
        } else {
            Outcome::Continue
        }
    }

    /// Checks for a run of four through `(row, col)` owned by that cell's player
    ///
    /// An empty cell never wins.
    ///
    /// # Panics
    /// If the coordinates lie outside the board.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let player = self.owner(row, col);
        if player == Owner::Empty {
            return false;
        }
        has_run_through(
            &self.grid,
            Dims::new(self.rows, self.cols),
            (row, col),
            &player,
            WIN_LENGTH,
        )
    }

    /// Clears the board and gives the first move back to player A
    pub fn reset(&mut self) {
        self.grid.fill(Owner::Empty);
        self.to_move = Player::A;
        self.last_drop = None;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn assert_column(&self, column: usize) {
        assert!(
            column < self.cols,
            "column {column} is out of range for a board with {} columns",
            self.cols
        );
    }
}

impl BoardView for GravityBoard {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn symbol_at(&self, row: usize, col: usize) -> char {
        self.owner(row, col).player().map_or('.', Player::symbol)
    }
}

impl fmt::Display for GravityBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{} ", self.symbol_at(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
