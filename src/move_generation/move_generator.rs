//! Side-wide successor generation.
//!
//! Expands a board into one successor per (piece, legal destination) pair for
//! the side to move. Enumeration order is row-major over pieces and scan order
//! within a piece; search tie-breaking depends on it.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_moves::{legal_moves, MoveCandidate};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMove {
    pub from: Position,
    pub candidate: MoveCandidate,
    /// Whether the mover was crowned by this move.
    pub promoted: bool,
    pub board_after: BoardState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &BoardState, side: Side) -> Vec<GeneratedMove>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ElementalMoveGenerator;

impl MoveGenerator for ElementalMoveGenerator {
    fn generate_moves(&self, board: &BoardState, side: Side) -> Vec<GeneratedMove> {
        let mut out = Vec::with_capacity(16);

        for piece in board.pieces_of(side) {
            for candidate in &legal_moves(board, piece) {
                let mut next = board.clone();
                let (moved, _) = apply_candidate(&mut next, piece, candidate);
                out.push(GeneratedMove {
                    from: piece.position(),
                    candidate: *candidate,
                    promoted: moved.is_king && !piece.is_king,
                    board_after: next,
                });
            }
        }

        out
    }
}

/// Move `piece` to the candidate's destination and resolve its capture.
///
/// Returns the moved piece and the square that was emptied by the capture.
pub fn apply_candidate(
    board: &mut BoardState,
    piece: &Piece,
    candidate: &MoveCandidate,
) -> (Piece, Option<Position>) {
    let moved = board.apply_move(piece, candidate.dest);
    if let Some(captured) = candidate.captured {
        board.remove_pieces(&[captured]);
    }
    (moved, candidate.captured)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{ElementalMoveGenerator, MoveGenerator};
    use crate::game_state::board_state::BoardState;
    use crate::game_state::checkers_types::*;
    use crate::utils::board_diagram::parse_board_diagram;

    #[test]
    fn opening_has_seven_moves_per_side() {
        let board = BoardState::new_game(&mut StdRng::seed_from_u64(21));
        let gen = ElementalMoveGenerator;
        assert_eq!(gen.generate_moves(&board, Side::Bottom).len(), 7);
        assert_eq!(gen.generate_moves(&board, Side::Top).len(), 7);
    }

    #[test]
    fn successors_are_ordered_row_major_then_by_direction() {
        let board = BoardState::new_game(&mut StdRng::seed_from_u64(21));
        let moves = ElementalMoveGenerator.generate_moves(&board, Side::Bottom);
        let pairs: Vec<_> = moves
            .iter()
            .map(|m| ((m.from.row, m.from.col), (m.candidate.dest.row, m.candidate.dest.col)))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ((5, 0), (4, 1)),
                ((5, 2), (4, 1)),
                ((5, 2), (4, 3)),
                ((5, 4), (4, 3)),
                ((5, 4), (4, 5)),
                ((5, 6), (4, 5)),
                ((5, 6), (4, 7)),
            ]
        );
    }

    #[test]
    fn capture_successor_removes_jumped_piece_and_leaves_input_untouched() {
        let board = parse_board_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . tf . . . . .
            . . . bw . . . .
            . . . . . . . .
            ",
        )
        .expect("diagram should parse");

        let moves = ElementalMoveGenerator.generate_moves(&board, Side::Bottom);
        let capture = moves
            .iter()
            .find(|m| m.candidate.is_capture())
            .expect("capture should be generated");

        assert_eq!(capture.board_after.piece_count(Side::Top), 0);
        assert!(capture.board_after.piece_at(Position::new(4, 1)).is_some());
        assert_eq!(board.piece_count(Side::Top), 1);
        assert!(board.piece_at(Position::new(6, 3)).is_some());
    }

    #[test]
    fn promotion_is_flagged() {
        let board = parse_board_diagram(
            "
            . . . . . . . .
            . . bw . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .expect("diagram should parse");

        let moves = ElementalMoveGenerator.generate_moves(&board, Side::Bottom);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.promoted));
        for m in &moves {
            let piece = m
                .board_after
                .piece_at(m.candidate.dest)
                .expect("moved piece should be on its destination");
            assert!(piece.is_king);
        }
    }

    #[test]
    fn side_without_pieces_generates_nothing() {
        let board = BoardState::new_empty();
        assert!(ElementalMoveGenerator
            .generate_moves(&board, Side::Top)
            .is_empty());
    }
}
