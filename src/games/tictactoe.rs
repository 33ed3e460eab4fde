//! # Tic-Tac-Toe Board
//!
//! A fixed 3x3 board stored as nine cells in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! The board only stores marks and answers queries. It does not check turn
//! order or report a result after placing; the minimax search relies on
//! being able to place either mark in any order while it explores.

use crate::error::{ParseMoveError, PlaceError};
use crate::games::{BoardView, Outcome};
use std::fmt;
use std::str::FromStr;

pub const CELL_COUNT: usize = 9;
const SIDE: usize = 3;

/// The eight lines that win: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Content of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Ai,
}

impl Mark {
    /// The other non-empty mark; `Empty` maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Ai,
            Mark::Ai => Mark::Human,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Human => 'X',
            Mark::Ai => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "Nobody"),
            Mark::Human => write!(f, "Human"),
            Mark::Ai => write!(f, "AI"),
        }
    }
}

/// A cell index, `0..=8`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellMove(pub usize);

impl fmt::Display for CellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl FromStr for CellMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let index = trimmed
            .parse::<usize>()
            .map_err(|_| ParseMoveError::NotANumber(trimmed.to_string()))?;
        if index >= CELL_COUNT {
            return Err(ParseMoveError::CellOutOfRange(index));
        }
        Ok(CellMove(index))
    }
}

/// The 3x3 board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedBoard {
    cells: [Mark; CELL_COUNT],
}

impl FixedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` on an empty cell
    ///
    /// # Errors
    /// `PlaceError::CellOccupied` if the cell already holds a mark; the board
    /// is left unchanged.
    ///
    /// # Panics
    /// If `index` is not below 9 or `mark` is `Mark::Empty`.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        assert!(mark != Mark::Empty, "cannot place an empty mark");
        if self.mark_at(index) != Mark::Empty {
            return Err(PlaceError::CellOccupied { index });
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Writes a mark the caller already knows is legal. Used by the search.
    pub(crate) fn put(&mut self, index: usize, mark: Mark) {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
    }

    /// Empties a cell again. Used by the search to undo a hypothetical move.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    /// Mark at `index`
    ///
    /// # Panics
    /// If `index` is not below 9.
    pub fn mark_at(&self, index: usize) -> Mark {
        assert!(index < CELL_COUNT, "cell {index} is out of range (0-8)");
        self.cells[index]
    }

    /// True if `mark` fills any of the eight winning lines.
    /// `Mark::Empty` never wins.
    pub fn has_won(&self, mark: Mark) -> bool {
        mark != Mark::Empty
            && WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |&i| self.cells[i] == Mark::Empty)
    }

    /// Mark holding a winning line, if any
    pub fn winner(&self) -> Option<Mark> {
        [Mark::Human, Mark::Ai].into_iter().find(|&m| self.has_won(m))
    }

    /// Result of the position as seen right after `mark` moved
    pub fn outcome_for(&self, mark: Mark) -> Outcome<Mark> {
        if self.has_won(mark) {
            Outcome::Win(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl BoardView for FixedBoard {
    fn dimensions(&self) -> (usize, usize) {
        (SIDE, SIDE)
    }

    fn symbol_at(&self, row: usize, col: usize) -> char {
        assert!(col < SIDE, "column {col} is out of range (0-2)");
        self.mark_at(row * SIDE + col).symbol()
    }
}

impl fmt::Display for FixedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            let line: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
