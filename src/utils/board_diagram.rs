//! Plain-text board diagrams.
//!
//! One line per row, top to bottom, eight whitespace-separated tokens each.
//! `.` is an empty cell; a piece is two characters: side/rank (`b` Bottom man,
//! `B` Bottom king, `t` Top man, `T` Top king) followed by the element letter
//! (`f`, `w`, `e`, `a`). Blank lines and `#` comments are skipped.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::*;

pub fn parse_board_diagram(diagram: &str) -> CheckersResult<BoardState> {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if rows.len() != BOARD_SIZE as usize {
        return Err(CheckersError::InvalidDiagram(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = BoardState::new_empty();
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE as usize {
            return Err(CheckersError::InvalidDiagram(format!(
                "row {row}: expected {BOARD_SIZE} cells, found {}",
                tokens.len()
            )));
        }

        for (col, token) in tokens.iter().enumerate() {
            let pos = Position::new(row as u8, col as u8);
            if let Some(piece) = parse_token(token, pos)? {
                if !pos.is_dark() {
                    return Err(CheckersError::InvalidDiagram(format!(
                        "row {row}, col {col}: pieces may only stand on dark squares"
                    )));
                }
                board.place_piece(piece);
            }
        }
    }

    Ok(board)
}

fn parse_token(token: &str, pos: Position) -> CheckersResult<Option<Piece>> {
    if token == "." {
        return Ok(None);
    }

    let mut chars = token.chars();
    let (Some(side_ch), Some(element_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CheckersError::InvalidDiagram(format!(
            "row {}, col {}: bad token '{token}'",
            pos.row, pos.col
        )));
    };

    let (side, is_king) = match side_ch {
        'b' => (Side::Bottom, false),
        'B' => (Side::Bottom, true),
        't' => (Side::Top, false),
        'T' => (Side::Top, true),
        other => {
            return Err(CheckersError::InvalidDiagram(format!(
                "row {}, col {}: unknown side '{other}'",
                pos.row, pos.col
            )))
        }
    };
    let element = Element::from_letter(element_ch).ok_or_else(|| {
        CheckersError::InvalidDiagram(format!(
            "row {}, col {}: unknown element '{element_ch}'",
            pos.row, pos.col
        ))
    })?;

    let mut piece = Piece::new(pos.row, pos.col, side, element);
    piece.is_king = is_king;
    Ok(Some(piece))
}

/// Emit `board` in the format `parse_board_diagram` accepts.
pub fn board_to_diagram(board: &BoardState) -> String {
    let mut out = String::new();
    for row in board.rows() {
        let tokens: Vec<String> = row.iter().map(cell_token).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

fn cell_token(cell: &Cell) -> String {
    match cell {
        Cell::Empty => ".".to_owned(),
        Cell::Occupied(piece) => {
            let side = match (piece.side, piece.is_king) {
                (Side::Bottom, false) => 'b',
                (Side::Bottom, true) => 'B',
                (Side::Top, false) => 't',
                (Side::Top, true) => 'T',
            };
            format!("{side}{}", piece.element.letter())
        }
    }
}
