//! Pluggable static evaluation.
//!
//! Search delegates leaf scoring to `BoardScorer` so alternate heuristics can
//! be swapped without touching the minimax code. Scores are absolute: positive
//! favours Bottom, negative favours Top.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_rules::{ELEMENT_INDEX_WEIGHT, KING_VALUE, MAN_VALUE};
use crate::game_state::checkers_types::*;

pub trait BoardScorer: Send + Sync {
    /// Bottom-minus-Top score of `board`.
    fn score(&self, board: &BoardState) -> f64;
}

/// Material count with a small element-index tie-breaker.
///
/// Each piece is worth 1 (2 when crowned) plus 0.1 times its index in
/// `Element::ALL`. Side totals accumulate row-major so float rounding is
/// stable from one call to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementalMaterialScorer;

impl ElementalMaterialScorer {
    #[inline]
    pub fn piece_value(piece: &Piece) -> f64 {
        let base = if piece.is_king { KING_VALUE } else { MAN_VALUE };
        base + piece.element.index() as f64 * ELEMENT_INDEX_WEIGHT
    }
}

impl BoardScorer for ElementalMaterialScorer {
    fn score(&self, board: &BoardState) -> f64 {
        let mut totals = [0.0f64; 2];
        for piece in board.pieces() {
            totals[piece.side.index()] += Self::piece_value(piece);
        }
        totals[Side::Bottom.index()] - totals[Side::Top.index()]
    }
}

/// Plain piece count (kings double), without the element term.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &BoardState) -> f64 {
        board
            .pieces()
            .map(|piece| {
                let value = if piece.is_king { KING_VALUE } else { MAN_VALUE };
                match piece.side {
                    Side::Bottom => value,
                    Side::Top => -value,
                }
            })
            .sum()
    }
}
