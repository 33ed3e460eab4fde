//! Tic-tac-toe match: a human against the minimax engine.
//!
//! Every accepted human move is answered immediately by the AI unless the
//! human's move ended the game. When the AI opens, it plays its first mark as
//! soon as the match starts (and again after every reset), so between calls it
//! is always the human's turn.

use super::{format_history, GameStatus, MoveHistoryEntry};
use crate::error::{MoveError, ParseMoveError, PlaceError};
use crate::games::tictactoe::{CellMove, FixedBoard, Mark, CELL_COUNT};
use crate::games::Outcome;
use crate::minimax::SearchEngine;
use log::{debug, info, warn};

/// Result of one human move and the AI's reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: CellMove,
    /// `None` when the human's move ended the game
    pub ai_reply: Option<CellMove>,
    pub outcome: Outcome<Mark>,
}

pub struct TicTacToeMatch {
    board: FixedBoard,
    engine: SearchEngine,
    ai_first: bool,
    move_history: Vec<MoveHistoryEntry<Mark, CellMove>>,
    status: GameStatus<Mark>,
}

impl Default for TicTacToeMatch {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TicTacToeMatch {
    /// Starts a match with a single-threaded engine
    pub fn new(ai_first: bool) -> Self {
        Self::with_engine(SearchEngine::new(), ai_first)
    }

    /// Starts a match with the given engine
    pub fn with_engine(engine: SearchEngine, ai_first: bool) -> Self {
        let mut game = Self {
            board: FixedBoard::new(),
            engine,
            ai_first,
            move_history: Vec::new(),
            status: GameStatus::InProgress,
        };
        if ai_first {
            game.ai_move();
        }
        game
    }

    pub fn board(&self) -> &FixedBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus<Mark> {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn ai_first(&self) -> bool {
        self.ai_first
    }

    pub fn move_history(&self) -> &[MoveHistoryEntry<Mark, CellMove>] {
        &self.move_history
    }

    /// Validate a human move without applying it
    pub fn validate_move(&self, mv: CellMove) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        // CellMove can be built directly, so the range is checked again here
        if mv.0 >= CELL_COUNT {
            return Err(ParseMoveError::CellOutOfRange(mv.0).into());
        }
        if self.board.mark_at(mv.0) != Mark::Empty {
            return Err(PlaceError::CellOccupied { index: mv.0 }.into());
        }
        Ok(())
    }

    /// Places the human's mark and lets the AI answer
    pub fn human_move(&mut self, mv: CellMove) -> Result<TurnReport, MoveError> {
        if let Err(e) = self.validate_move(mv) {
            warn!("rejected tic-tac-toe move {mv}: {e}");
            return Err(e);
        }

        self.board.place(mv.0, Mark::Human)?;
        self.record(Mark::Human, mv);

        let outcome = self.board.outcome_for(Mark::Human);
        if outcome.is_game_over() {
            self.finish(outcome);
            return Ok(TurnReport {
                human_move: mv,
                ai_reply: None,
                outcome,
            });
        }

        let (reply, outcome) = self.ai_move();
        Ok(TurnReport {
            human_move: mv,
            ai_reply: Some(reply),
            outcome,
        })
    }

    /// Parses `input` as a cell index and plays it
    pub fn human_move_str(&mut self, input: &str) -> Result<TurnReport, MoveError> {
        let mv: CellMove = input.parse()?;
        self.human_move(mv)
    }

    /// Clears the board; the AI opens again if it opened before
    pub fn reset(&mut self) {
        self.board.reset();
        self.move_history.clear();
        self.status = GameStatus::InProgress;
        if self.ai_first {
            self.ai_move();
        }
    }

    /// Format move history as a printable string
    pub fn format_history(&self) -> String {
        format_history("Tic-Tac-Toe", &self.move_history, self.status, Mark::Human)
    }

    /// Runs the search on the live board and plays its answer.
    /// Only called while the game is in progress, so an empty cell exists.
    fn ai_move(&mut self) -> (CellMove, Outcome<Mark>) {
        let cell = self.engine.best_move(&mut self.board, Mark::Ai, Mark::Human);
        self.board.put(cell, Mark::Ai);
        debug!("AI plays cell {cell}");
        self.record(Mark::Ai, CellMove(cell));

        let outcome = self.board.outcome_for(Mark::Ai);
        self.finish(outcome);
        (CellMove(cell), outcome)
    }

    fn record(&mut self, player: Mark, mv: CellMove) {
        let move_number = self.move_history.len() + 1;
        self.move_history.push(MoveHistoryEntry::new(player, mv, move_number));
    }

    fn finish(&mut self, outcome: Outcome<Mark>) {
        match outcome {
            Outcome::Win(winner) => {
                info!("{winner} has won");
                self.status = GameStatus::Win(winner);
            }
            Outcome::Draw => {
                info!("board is full, the game is a draw");
                self.status = GameStatus::Draw;
            }
            Outcome::Continue | Outcome::IllegalMove => {}
        }
    }
}
