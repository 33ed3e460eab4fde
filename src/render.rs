//! Terminal rendering for any [`BoardView`].
//!
//! `X` pieces print red, `O` pieces yellow and empty cells dimmed. Color is
//! controlled by the `colored` crate and disappears when output is not a
//! terminal or `NO_COLOR` is set.

use crate::games::BoardView;
use colored::Colorize;

/// Layout switches for [`render`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print column numbers above the grid (connect-four input)
    pub column_header: bool,
    /// Print the cell index in place of empty cells (tic-tac-toe input)
    pub index_empty_cells: bool,
    /// Cell drawn bold and underlined, usually the last move
    pub highlight: Option<(usize, usize)>,
}

/// Renders the board, one line per row, cells separated by a space.
pub fn render<B: BoardView>(board: &B, options: &RenderOptions) -> String {
    let (rows, cols) = board.dimensions();
    let mut out = String::new();

    if options.column_header {
        let header: Vec<String> = (0..cols).map(|c| (c % 10).to_string()).collect();
        out.push_str(&header.join(" "));
        out.push('\n');
    }

    for r in 0..rows {
        let mut line = Vec::with_capacity(cols);
        for c in 0..cols {
            let symbol = board.symbol_at(r, c);
            let text = if symbol == '.' && options.index_empty_cells {
                (r * cols + c).to_string()
            } else {
                symbol.to_string()
            };
            let styled = match symbol {
                'X' => text.red(),
                'O' => text.yellow(),
                _ => text.dimmed(),
            };
            let styled = if options.highlight == Some((r, c)) {
                styled.bold().underline()
            } else {
                styled
            };
            line.push(styled.to_string());
        }
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect4::{GravityBoard, Player};
    use crate::games::tictactoe::{FixedBoard, Mark};

    #[test]
    fn test_render_connect4_with_header() {
        colored::control::set_override(false);
        let mut board = GravityBoard::new(3, 4);
        board.drop_as(2, Player::A);
        board.drop_as(2, Player::B);
        let options = RenderOptions {
            column_header: true,
            ..Default::default()
        };
        assert_eq!(render(&board, &options), "0 1 2 3\n. . . .\n. . O .\n. . X .\n");
    }

    #[test]
    fn test_render_tictactoe_indices() {
        colored::control::set_override(false);
        let mut board = FixedBoard::new();
        board.place(4, Mark::Human).unwrap();
        board.place(0, Mark::Ai).unwrap();
        let options = RenderOptions {
            index_empty_cells: true,
            highlight: Some((0, 0)),
            ..Default::default()
        };
        assert_eq!(render(&board, &options), "O 1 2\n3 X 5\n6 7 8\n");
    }
}
