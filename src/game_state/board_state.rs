//! Grid-of-cells board representation.
//!
//! `BoardState` is a plain value: an 8x8 array of `Cell`. Cloning it yields a
//! fully independent copy, which is what search relies on when it explores
//! successors. Mutation is limited to moving a piece (with promotion) and
//! removing captured pieces.

use rand::Rng;

use crate::game_state::checkers_rules::{BOTTOM_START_ROWS, TOP_START_ROWS};
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: three rows per side on the dark squares, each
    /// piece with an element drawn uniformly from `rng`.
    pub fn new_game<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::new_empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !Position::new(row, col).is_dark() {
                    continue;
                }
                let side = if TOP_START_ROWS.contains(&row) {
                    Side::Top
                } else if BOTTOM_START_ROWS.contains(&row) {
                    Side::Bottom
                } else {
                    continue;
                };
                let element = Element::ALL[rng.random_range(0..Element::ALL.len())];
                board.place_piece(Piece::new(row, col, side, element));
            }
        }
        board
    }

    /// Opening layout seeded from the thread-local RNG.
    pub fn new_random_game() -> Self {
        Self::new_game(&mut rand::rng())
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).piece()
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Put `piece` into the slot named by its own coordinates, replacing
    /// whatever was there.
    pub fn place_piece(&mut self, piece: Piece) {
        self.cells[piece.row as usize][piece.col as usize] = Cell::Occupied(piece);
    }

    /// Move `piece` to `dest`, crowning it on its promotion row.
    ///
    /// Returns the piece as it now stands on `dest`. The origin slot is
    /// vacated; any capture is resolved separately via `remove_pieces`.
    pub fn apply_move(&mut self, piece: &Piece, dest: Position) -> Piece {
        let mut moved = *piece;
        self.cells[piece.row as usize][piece.col as usize] = Cell::Empty;
        moved.row = dest.row;
        moved.col = dest.col;
        if dest.row == moved.side.promotion_row() {
            moved.make_king();
        }
        self.place_piece(moved);
        moved
    }

    pub fn remove_pieces(&mut self, positions: &[Position]) {
        for pos in positions {
            self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        }
    }

    /// All pieces, row-major from the top-left corner.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(Cell::piece)
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.side == side)
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    /// Rows of cells, top to bottom, for renderers.
    #[inline]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        &self.cells
    }
}
