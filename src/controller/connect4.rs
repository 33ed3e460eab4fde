//! Connect-four match: two players sharing one [`GravityBoard`].

use super::{format_history, GameStatus, MoveHistoryEntry};
use crate::error::MoveError;
use crate::games::connect4::{Connect4Move, GravityBoard, Player};
use crate::games::Outcome;
use log::{info, warn};

/// What happened on an accepted drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    pub player: Player,
    /// Where the piece landed
    pub row: usize,
    pub column: usize,
    /// `Continue`, `Win` or `Draw` (full board, no winner)
    pub outcome: Outcome<Player>,
}

/// Owns the board of one connect-four match and alternates the players
#[derive(Debug, Clone)]
pub struct Connect4Match {
    board: GravityBoard,
    move_history: Vec<MoveHistoryEntry<Player, Connect4Move>>,
    status: GameStatus<Player>,
}

impl Default for Connect4Match {
    fn default() -> Self {
        Self::with_board(GravityBoard::default())
    }
}

impl Connect4Match {
    /// Starts a match on an empty `rows` x `cols` board, player A first
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_board(GravityBoard::new(rows, cols))
    }

    fn with_board(board: GravityBoard) -> Self {
        Self {
            board,
            move_history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &GravityBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus<Player> {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    pub fn move_history(&self) -> &[MoveHistoryEntry<Player, Connect4Move>] {
        &self.move_history
    }

    /// Columns the player to move may choose; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Connect4Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_columns().into_iter().map(Connect4Move).collect()
    }

    /// Validate a move without applying it
    pub fn validate_move(&self, mv: Connect4Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let (_, cols) = self.board.dimensions();
        if mv.0 >= cols {
            return Err(MoveError::ColumnOutOfRange {
                column: mv.0,
                max: cols - 1,
            });
        }
        if !self.board.is_legal(mv.0) {
            return Err(MoveError::ColumnFull(mv.0));
        }
        Ok(())
    }

    /// Drops a piece for the player to move
    ///
    /// On a non-winning drop the turn passes to the other player, unless the
    /// board is now full, in which case the match ends in a draw.
    pub fn play(&mut self, mv: Connect4Move) -> Result<DropReport, MoveError> {
        if let Err(e) = self.validate_move(mv) {
            warn!("rejected connect-four move {mv}: {e}");
            return Err(e);
        }

        let player = self.board.to_move();
        let outcome = match self.board.drop(mv.0) {
            Outcome::IllegalMove => return Err(MoveError::ColumnFull(mv.0)),
            Outcome::Win(winner) => {
                info!("{winner} has won");
                self.status = GameStatus::Win(winner);
                Outcome::Win(winner)
            }
            Outcome::Continue | Outcome::Draw => {
                if self.board.is_full() {
                    info!("board is full, the game is a draw");
                    self.status = GameStatus::Draw;
                    Outcome::Draw
                } else {
                    self.board.pass_turn();
                    Outcome::Continue
                }
            }
        };

        let move_number = self.move_history.len() + 1;
        self.move_history.push(MoveHistoryEntry::new(player, mv, move_number));

        let (row, column) = self.board.last_drop().unwrap_or((0, mv.0));
        Ok(DropReport {
            player,
            row,
            column,
            outcome,
        })
    }

    /// Parses `input` as a column and plays it
    pub fn play_str(&mut self, input: &str) -> Result<DropReport, MoveError> {
        let mv: Connect4Move = input.parse()?;
        self.play(mv)
    }

    /// Empties the board and starts over with player A
    pub fn reset(&mut self) {
        self.board.reset();
        self.move_history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Format move history as a printable string
    pub fn format_history(&self) -> String {
        format_history("Connect 4", &self.move_history, self.status, self.to_move())
    }
}
