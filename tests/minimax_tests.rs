//! Minimax integration tests: perfect play and the end-to-end match flow.

use duel::minimax::score;
use duel::{best_move, CellMove, FixedBoard, GameStatus, Mark, Outcome, SearchEngine, TicTacToeMatch};

const CORNERS_AND_CENTRE: [usize; 5] = [0, 2, 4, 6, 8];

/// Tries every human reply to the AI's choices and returns the number of games
/// the human won.
fn human_wins_against_ai(board: &mut FixedBoard, ai_to_move: bool) -> usize {
    if board.has_won(Mark::Ai) || board.is_full() {
        return 0;
    }
    if board.has_won(Mark::Human) {
        return 1;
    }

    if ai_to_move {
        let cell = best_move(board, Mark::Ai, Mark::Human);
        board.place(cell, Mark::Ai).unwrap();
        let losses = human_wins_against_ai(board, false);
        *board = without(board, cell);
        losses
    } else {
        let cells: Vec<usize> = board.empty_cells().collect();
        cells
            .into_iter()
            .map(|cell| {
                board.place(cell, Mark::Human).unwrap();
                let losses = human_wins_against_ai(board, true);
                *board = without(board, cell);
                losses
            })
            .sum()
    }
}

/// Copy of `board` with `cell` emptied, built through the public API only.
fn without(board: &FixedBoard, cell: usize) -> FixedBoard {
    let mut copy = FixedBoard::new();
    for i in 0..9 {
        let mark = board.mark_at(i);
        if i != cell && mark != Mark::Empty {
            copy.place(i, mark).unwrap();
        }
    }
    copy
}

#[test]
fn test_empty_board_opening_is_corner_or_centre() {
    let mut board = FixedBoard::new();
    let cell = best_move(&mut board, Mark::Ai, Mark::Human);
    assert!(CORNERS_AND_CENTRE.contains(&cell), "opened on edge {cell}");
    assert_eq!(board, FixedBoard::new());
}

#[test]
fn test_ai_never_loses_when_opening() {
    let mut board = FixedBoard::new();
    assert_eq!(human_wins_against_ai(&mut board, true), 0);
}

#[test]
fn test_ai_never_loses_when_replying() {
    let mut board = FixedBoard::new();
    assert_eq!(human_wins_against_ai(&mut board, false), 0);
}

#[test]
fn test_prefers_faster_win() {
    // O . O
    // X X .
    // O X X
    // Cell 1 wins now; cell 5 would only block.
    let mut board = FixedBoard::new();
    for (i, m) in [
        (0, Mark::Ai),
        (2, Mark::Ai),
        (6, Mark::Ai),
        (3, Mark::Human),
        (4, Mark::Human),
        (7, Mark::Human),
        (8, Mark::Human),
    ] {
        board.place(i, m).unwrap();
    }
    let (cell, stats) = SearchEngine::new().search(&mut board, Mark::Ai, Mark::Human);
    assert_eq!(cell, 1);
    assert_eq!(stats.best_score, 9);
}

#[test]
fn test_score_is_zero_for_drawn_position() {
    let mut board = FixedBoard::new();
    assert_eq!(score(&mut board, 0, true, Mark::Ai, Mark::Human), 0);
    assert_eq!(board, FixedBoard::new());
}

#[test]
fn test_marks_can_be_swapped() {
    // The engine plays whichever mark it is handed
    let mut board = FixedBoard::new();
    board.place(0, Mark::Ai).unwrap();
    board.place(1, Mark::Ai).unwrap();
    board.place(4, Mark::Human).unwrap();
    // Searching for Human: must block the Ai line at 2
    assert_eq!(best_move(&mut board, Mark::Human, Mark::Ai), 2);
}

#[test]
fn test_end_to_end_centre_opening() {
    let mut board = FixedBoard::new();
    board.place(4, Mark::Human).unwrap();

    let reply = best_move(&mut board, Mark::Ai, Mark::Human);
    assert_eq!(reply, 0);
    board.place(reply, Mark::Ai).unwrap();

    assert_eq!(board.mark_count(), 2);
    assert_eq!(board.mark_at(4), Mark::Human);
    assert_eq!(board.mark_at(0), Mark::Ai);
    assert!(!board.is_full());
    assert!(!board.has_won(Mark::Human));
    assert!(!board.has_won(Mark::Ai));
}

#[test]
fn test_parallel_match_plays_to_a_draw() {
    let engine = SearchEngine::with_threads(2).unwrap();
    let mut game = TicTacToeMatch::with_engine(engine, false);
    // Human follows the same engine from its own side, so both play perfectly
    let helper = SearchEngine::new();
    while !game.is_game_over() {
        let mut scratch = *game.board();
        let cell = helper.best_move(&mut scratch, Mark::Human, Mark::Ai);
        let report = game.human_move(CellMove(cell)).unwrap();
        assert_ne!(report.outcome, Outcome::IllegalMove);
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
}
