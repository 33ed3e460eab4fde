//! # Minimax Search for Tic-Tac-Toe
//!
//! Exhaustive adversarial search over the full game tree, without pruning.
//! Terminal positions score `10 - depth` for an AI win and `depth - 10` for a
//! human win, so the engine prefers quick wins and slow losses.
//!
//! The search backtracks over the caller's board: each hypothetical mark is
//! placed, scored and removed again before the next candidate is tried, so the
//! board is unchanged once the search returns. When the engine owns a thread
//! pool, the root candidates are scored in parallel, each worker on its own
//! copy of the board.

use crate::error::SearchError;
use crate::games::tictactoe::{FixedBoard, Mark, CELL_COUNT};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::{Duration, Instant};

/// Score of a win found at depth zero
pub const WIN_SCORE: i32 = 10;

/// Statistics about a finished search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of positions scored, root candidates included
    pub nodes: u64,
    /// Score of every root candidate, indexed by cell; `None` for occupied cells
    pub root_scores: [Option<i32>; CELL_COUNT],
    /// Score of the chosen move
    pub best_score: i32,
    /// Wall-clock time of the search
    pub elapsed: Duration,
}

/// The minimax engine
///
/// Without a thread pool every candidate is scored on the caller's board.
/// With one, root candidates are spread over the pool; the chosen move is the
/// same either way.
pub struct SearchEngine {
    /// The rayon thread pool for root-parallel search.
    pool: Option<ThreadPool>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Creates a single-threaded engine.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Creates an engine that scores root candidates in parallel.
    ///
    /// # Arguments
    /// * `num_threads` - The number of threads to use. If 0, rayon will use the default.
    pub fn with_threads(num_threads: usize) -> Result<Self, SearchError> {
        let pool_builder = ThreadPoolBuilder::new();
        let pool = if num_threads > 0 {
            pool_builder.num_threads(num_threads).build()?
        } else {
            pool_builder.build()?
        };
        Ok(Self { pool: Some(pool) })
    }

    /// Threads used for a search
    pub fn num_threads(&self) -> usize {
        self.pool.as_ref().map_or(1, ThreadPool::current_num_threads)
    }

    /// Returns the cell that maximizes the AI's score against optimal play.
    ///
    /// # Panics
    /// If the board is full, or `ai` and `human` are not two distinct non-empty marks.
    pub fn best_move(&self, board: &mut FixedBoard, ai: Mark, human: Mark) -> usize {
        self.search(board, ai, human).0
    }

    /// Like [`SearchEngine::best_move`], also returning search statistics.
    ///
    /// Candidates are tried in cell order and only a strictly greater score
    /// replaces the current best, so ties go to the lowest cell index.
    pub fn search(&self, board: &mut FixedBoard, ai: Mark, human: Mark) -> (usize, SearchStatistics) {
        assert!(
            ai != Mark::Empty && human != Mark::Empty && ai != human,
            "search needs two distinct non-empty marks, got {ai:?} and {human:?}"
        );
        let candidates: Vec<usize> = board.empty_cells().collect();
        assert!(!candidates.is_empty(), "best move requested on a full board");

        let start = Instant::now();
        let scored: Vec<(usize, i32, u64)> = match &self.pool {
            None => candidates
                .iter()
                .map(|&cell| score_root_candidate(board, cell, ai, human))
                .collect::<Vec<_>>(),
            Some(pool) => {
                let root = *board;
                pool.install(|| {
                    candidates
                        .par_iter()
                        .map(|&cell| {
                            let mut local = root;
                            score_root_candidate(&mut local, cell, ai, human)
                        })
                        .collect::<Vec<_>>()
                })
            }
        };

        let mut stats = SearchStatistics::default();
        let (mut best, mut best_score) = (scored[0].0, scored[0].1);
        for &(cell, score, nodes) in &scored {
            stats.root_scores[cell] = Some(score);
            stats.nodes += nodes;
            if score > best_score {
                best = cell;
                best_score = score;
            }
        }
        stats.best_score = best_score;
        stats.elapsed = start.elapsed();

        debug!(
            "minimax picked cell {best} (score {best_score}, {} nodes, {:?})",
            stats.nodes, stats.elapsed
        );
        (best, stats)
    }
}

/// Single-threaded convenience wrapper around [`SearchEngine::best_move`].
pub fn best_move(board: &mut FixedBoard, ai: Mark, human: Mark) -> usize {
    SearchEngine::new().best_move(board, ai, human)
}

/// Minimax value of `board` at `depth`, with the AI to move if `maximizing`.
///
/// Terminal checks run in order: AI line, human line, full board.
pub fn score(board: &mut FixedBoard, depth: i32, maximizing: bool, ai: Mark, human: Mark) -> i32 {
    let mut nodes = 0;
    score_counted(board, depth, maximizing, ai, human, &mut nodes)
}

/// Places the AI mark on `cell`, scores the reply position and takes it back.
fn score_root_candidate(board: &mut FixedBoard, cell: usize, ai: Mark, human: Mark) -> (usize, i32, u64) {
    let mut nodes = 0;
    board.put(cell, ai);
    let value = score_counted(board, 1, false, ai, human, &mut nodes);
    board.clear(cell);
    (cell, value, nodes)
}

fn score_counted(
    board: &mut FixedBoard,
    depth: i32,
    maximizing: bool,
    ai: Mark,
    human: Mark,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if board.has_won(ai) {
        return WIN_SCORE - depth;
    }
    if board.has_won(human) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (ai, i32::MIN)
    } else {
        (human, i32::MAX)
    };

    for cell in 0..CELL_COUNT {
        if board.mark_at(cell) != Mark::Empty {
            continue;
        }
        board.put(cell, mark);
        let value = score_counted(board, depth + 1, !maximizing, ai, human, nodes);
        board.clear(cell);

        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> FixedBoard {
        let mut board = FixedBoard::new();
        for &(i, m) in marks {
            board.place(i, m).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // . . .
        let mut board = board_from(&[(0, Mark::Ai), (1, Mark::Ai), (3, Mark::Human), (4, Mark::Human)]);
        assert_eq!(best_move(&mut board, Mark::Ai, Mark::Human), 2);
    }

    #[test]
    fn test_blocks_imminent_loss() {
        // X X .
        // . O .
        // . . .
        let mut board = board_from(&[(0, Mark::Human), (1, Mark::Human), (4, Mark::Ai)]);
        assert_eq!(best_move(&mut board, Mark::Ai, Mark::Human), 2);
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut board = board_from(&[(4, Mark::Human)]);
        let before = board;
        best_move(&mut board, Mark::Ai, Mark::Human);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_scores() {
        let mut ai_won = board_from(&[(2, Mark::Ai), (4, Mark::Ai), (6, Mark::Ai)]);
        assert_eq!(score(&mut ai_won, 3, true, Mark::Ai, Mark::Human), 7);

        let mut human_won = board_from(&[(0, Mark::Human), (3, Mark::Human), (6, Mark::Human)]);
        assert_eq!(score(&mut human_won, 4, false, Mark::Ai, Mark::Human), -6);
    }

    #[test]
    fn test_last_cell_is_forced() {
        // X O X
        // X O O
        // O X .
        let mut board = board_from(&[
            (0, Mark::Human),
            (1, Mark::Ai),
            (2, Mark::Human),
            (3, Mark::Human),
            (4, Mark::Ai),
            (5, Mark::Ai),
            (6, Mark::Ai),
            (7, Mark::Human),
        ]);
        let (cell, stats) = SearchEngine::new().search(&mut board, Mark::Ai, Mark::Human);
        assert_eq!(cell, 8);
        assert_eq!(stats.best_score, 0);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_root_scores_cover_empty_cells_only() {
        let mut board = board_from(&[(4, Mark::Human)]);
        let (_, stats) = SearchEngine::new().search(&mut board, Mark::Ai, Mark::Human);
        assert_eq!(stats.root_scores[4], None);
        assert_eq!(stats.root_scores.iter().flatten().count(), 8);
        // corners hold the draw, edges lose against a centre opening
        assert_eq!(stats.root_scores[0], Some(0));
        assert!(stats.root_scores[1].unwrap() < 0);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        let mut board = board_from(&[
            (0, Mark::Human),
            (1, Mark::Ai),
            (2, Mark::Human),
            (3, Mark::Human),
            (4, Mark::Ai),
            (5, Mark::Ai),
            (6, Mark::Ai),
            (7, Mark::Human),
            (8, Mark::Human),
        ]);
        best_move(&mut board, Mark::Ai, Mark::Human);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let engine = SearchEngine::with_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);
        for opening in 0..CELL_COUNT {
            let mut board = board_from(&[(opening, Mark::Human)]);
            let (serial, serial_stats) = SearchEngine::new().search(&mut board, Mark::Ai, Mark::Human);
            let (parallel, parallel_stats) = engine.search(&mut board, Mark::Ai, Mark::Human);
            assert_eq!(serial, parallel, "opening {opening}");
            assert_eq!(serial_stats.root_scores, parallel_stats.root_scores);
            assert_eq!(serial_stats.nodes, parallel_stats.nodes);
        }
    }
}
