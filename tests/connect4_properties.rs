//! Property tests for the gravity board.

use duel::{GravityBoard, Outcome, Owner, Player};
use proptest::collection;
use proptest::prelude::*;

const ROWS: usize = 6;
const COLS: usize = 7;

/// Every occupied cell sits on top of occupied cells only.
fn is_gravity_stack(board: &GravityBoard) -> bool {
    let (rows, cols) = board.dimensions();
    (0..cols).all(|c| {
        (0..rows).all(|r| board.owner(r, c) == Owner::Empty || (r + 1..rows).all(|below| board.owner(below, c) != Owner::Empty))
    })
}

/// Plays the columns in order with alternating players until someone wins.
fn play_out(board: &mut GravityBoard, columns: &[usize]) -> Option<Player> {
    for &c in columns {
        match board.drop(c) {
            Outcome::Win(p) => return Some(p),
            Outcome::Continue => board.pass_turn(),
            Outcome::IllegalMove | Outcome::Draw => {}
        }
    }
    None
}

proptest! {
    #[test]
    fn drops_keep_columns_stacked(columns in collection::vec(0..COLS, 0..80)) {
        let mut board = GravityBoard::new(ROWS, COLS);
        for &c in &columns {
            let outcome = board.drop(c);
            prop_assert!(is_gravity_stack(&board));
            match outcome {
                Outcome::Win(_) => break,
                Outcome::Continue => board.pass_turn(),
                _ => {}
            }
        }
    }

    #[test]
    fn full_column_rejects_without_change(filler in collection::vec(0..COLS, 0..30), column in 0..COLS) {
        let mut board = GravityBoard::new(ROWS, COLS);
        if play_out(&mut board, &filler).is_some() {
            return Ok(());
        }

        // top the column up; histories that end in a win have nothing to check
        while board.landing_row(column).is_some() {
            if board.drop(column) != Outcome::Continue {
                return Ok(());
            }
            board.pass_turn();
        }

        let before = board.clone();
        prop_assert_eq!(board.drop(column), Outcome::IllegalMove);
        prop_assert_eq!(&board, &before);
    }

    #[test]
    fn drop_lands_on_reported_row(columns in collection::vec(0..COLS, 1..40)) {
        let mut board = GravityBoard::new(ROWS, COLS);
        for &c in &columns {
            let expected = board.landing_row(c);
            let outcome = board.drop(c);
            match expected {
                None => prop_assert_eq!(outcome, Outcome::IllegalMove),
                Some(row) => {
                    prop_assert_eq!(board.last_drop(), Some((row, c)));
                    prop_assert_ne!(board.owner(row, c), Owner::Empty);
                }
            }
            match outcome {
                Outcome::Win(_) => break,
                Outcome::Continue => board.pass_turn(),
                _ => {}
            }
        }
    }

    #[test]
    fn win_only_through_a_run_of_four(columns in collection::vec(0..COLS, 1..60)) {
        let mut board = GravityBoard::new(ROWS, COLS);
        if let Some(winner) = play_out(&mut board, &columns) {
            let (row, col) = board.last_drop().unwrap();
            prop_assert_eq!(board.owner(row, col).player(), Some(winner));
            prop_assert!(board.check_win(row, col));
        }
    }

    #[test]
    fn queries_are_idempotent(columns in collection::vec(0..COLS, 0..40)) {
        let mut board = GravityBoard::new(ROWS, COLS);
        play_out(&mut board, &columns);
        let snapshot = board.clone();
        for r in 0..ROWS {
            for c in 0..COLS {
                prop_assert_eq!(board.owner(r, c), board.owner(r, c));
                prop_assert_eq!(board.check_win(r, c), board.check_win(r, c));
            }
        }
        prop_assert_eq!(board, snapshot);
    }
}

#[test]
fn test_win_reported_on_completing_drop_only() {
    use Player::{A, B};
    let cases: [&[(usize, Player)]; 4] = [
        // horizontal
        &[(0, A), (1, A), (2, A), (3, A)],
        // vertical
        &[(5, A), (5, A), (5, A), (5, A)],
        // rising diagonal on B filler
        &[(0, A), (1, B), (1, A), (2, B), (2, B), (2, A), (3, B), (3, B), (3, B), (3, A)],
        // falling diagonal on B filler
        &[(3, A), (2, B), (2, A), (1, B), (1, B), (1, A), (0, B), (0, B), (0, B), (0, A)],
    ];
    for drops in cases {
        let mut board = GravityBoard::default();
        let (last, rest) = drops.split_last().unwrap();
        for &(c, p) in rest {
            assert_eq!(board.drop_as(c, p), Outcome::Continue, "early result in {drops:?}");
        }
        assert_eq!(board.drop_as(last.0, last.1), Outcome::Win(A), "{drops:?}");
    }
}
