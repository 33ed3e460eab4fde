#![no_std]

//! Run detection for grid-based connect-N games.
//!
//! Instead of rescanning the whole board, a win is detected incrementally from
//! the cell that was just filled: for each axis the scanner walks outward in
//! both signed directions, counting contiguous cells owned by the same player.

/// A scan axis, expressed as the step taken in the positive direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub d_row: isize,
    pub d_col: isize,
}

/// Horizontal, vertical, down-right diagonal, down-left diagonal.
pub const AXES: [Axis; 4] = [
    Axis { d_row: 0, d_col: 1 },
    Axis { d_row: 1, d_col: 0 },
    Axis { d_row: 1, d_col: 1 },
    Axis { d_row: 1, d_col: -1 },
];

/// Board dimensions as `(rows, cols)` of a row-major cell slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Row-major index of `(row, col)`, or `None` if it lies off the grid.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }
}

/// Counts cells equal to `player` strictly beyond `pivot` along `(d_row, d_col)`.
///
/// The walk stops at the grid edge or at the first cell with a different value
/// (including empty cells). The pivot itself is never counted.
///
/// # Arguments
/// * `cells` - The board as a row-major slice of `dims.rows * dims.cols` cells
/// * `dims` - Board dimensions
/// * `pivot` - `(row, col)` of the cell the walk starts from
/// * `d_row`, `d_col` - Step applied on every iteration
/// * `player` - Cell value being counted
pub fn count_direction<T: PartialEq>(
    cells: &[T],
    dims: Dims,
    pivot: (usize, usize),
    d_row: isize,
    d_col: isize,
    player: &T,
) -> usize {
    let mut count = 0;
    let mut r = pivot.0 as isize + d_row;
    let mut c = pivot.1 as isize + d_col;

    while let Some(idx) = dims.index(r, c) {
        match cells.get(idx) {
            Some(cell) if cell == player => count += 1,
            _ => break,
        }
        r += d_row;
        c += d_col;
    }
    count
}

/// Length of the run through `pivot` along `axis`, counting the pivot as one.
pub fn run_length<T: PartialEq>(
    cells: &[T],
    dims: Dims,
    pivot: (usize, usize),
    axis: Axis,
    player: &T,
) -> usize {
    1 + count_direction(cells, dims, pivot, axis.d_row, axis.d_col, player)
        + count_direction(cells, dims, pivot, -axis.d_row, -axis.d_col, player)
}

/// Checks whether any axis through `pivot` holds a run of at least `threshold`.
///
/// The caller guarantees `pivot` belongs to `player`; the pivot is counted
/// without being inspected.
pub fn has_run_through<T: PartialEq>(
    cells: &[T],
    dims: Dims,
    pivot: (usize, usize),
    player: &T,
    threshold: usize,
) -> bool {
    AXES
        .iter()
        .any(|&axis| run_length(cells, dims, pivot, axis, player) >= threshold)
}
