//! Terminal-oriented board renderer.
//!
//! Pieces show as their element letter, uppercase for Bottom and lowercase
//! for Top; kings carry a trailing `*`. Rows and columns are labelled with
//! the indices `select` expects.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::*;

pub fn render_board(board: &BoardState, selected: Option<Position>) -> String {
    let mut out = String::new();

    out.push_str("    0  1  2  3  4  5  6  7\n");
    for (r, row) in board.rows().iter().enumerate() {
        out.push_str(&format!("{r}  "));
        for (c, cell) in row.iter().enumerate() {
            let pos = Position::new(r as u8, c as u8);
            let marker = if selected == Some(pos) { '[' } else { ' ' };
            out.push(marker);
            out.push_str(&cell_glyph(cell, pos));
        }
        out.push('\n');
    }

    out.pop();
    out
}

fn cell_glyph(cell: &Cell, pos: Position) -> String {
    match cell {
        Cell::Empty if pos.is_dark() => "· ".to_owned(),
        Cell::Empty => "  ".to_owned(),
        Cell::Occupied(piece) => {
            let letter = match piece.side {
                Side::Bottom => piece.element.letter().to_ascii_uppercase(),
                Side::Top => piece.element.letter(),
            };
            let king = if piece.is_king { '*' } else { ' ' };
            format!("{letter}{king}")
        }
    }
}

/// One-line status for the side to move.
pub fn render_status(turn: Side, board: &BoardState) -> String {
    format!(
        "{turn} to move | Bottom pieces: {} | Top pieces: {}",
        board.piece_count(Side::Bottom),
        board.piece_count(Side::Top)
    )
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_status};
    use crate::game_state::checkers_types::*;
    use crate::utils::board_diagram::parse_board_diagram;

    #[test]
    fn renders_letters_kings_and_selection() {
        let board = parse_board_diagram(
            "
            . Tw . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            bf . . . . . . .
            ",
        )
        .expect("diagram should parse");

        let text = render_board(&board, Some(Position::new(7, 0)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1].contains("w*"));
        assert!(lines[8].starts_with("7  [F"));
    }

    #[test]
    fn status_counts_pieces() {
        let board = parse_board_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            bf . . . . . . .
            ",
        )
        .expect("diagram should parse");
        assert_eq!(
            render_status(Side::Bottom, &board),
            "Bottom to move | Bottom pieces: 1 | Top pieces: 0"
        );
    }
}
