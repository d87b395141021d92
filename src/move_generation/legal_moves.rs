//! Per-piece legal destination generation.
//!
//! Men step one square diagonally forward, kings in all four diagonal
//! directions. A diagonal neighbour held by an opponent can be jumped when
//! the landing square beyond it is empty and the mover does not lose the
//! elemental matchup. Captures are single-jump and never forced.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::*;
use crate::game_state::elements::may_capture;

/// Scan order for diagonal directions. Men keep only the two forward entries.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// One legal destination for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub dest: Position,
    /// Square of the jumped piece, if this is a capture.
    pub captured: Option<Position>,
}

impl MoveCandidate {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Destination -> optional capture mapping for one piece, in scan order.
///
/// Each direction contributes at most one destination and distinct directions
/// reach distinct squares, so destinations are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    candidates: Vec<MoveCandidate>,
}

impl LegalMoves {
    /// `Some(captured)` when `dest` is legal (`captured` itself may be `None`).
    pub fn get(&self, dest: Position) -> Option<Option<Position>> {
        self.candidates
            .iter()
            .find(|candidate| candidate.dest == dest)
            .map(|candidate| candidate.captured)
    }

    #[inline]
    pub fn contains(&self, dest: Position) -> bool {
        self.get(dest).is_some()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MoveCandidate> {
        self.candidates.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a MoveCandidate;
    type IntoIter = std::slice::Iter<'a, MoveCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Directions `piece` may travel in, in scan order.
pub fn directions_for(piece: &Piece) -> impl Iterator<Item = (i8, i8)> {
    let forward = piece.side.forward();
    let is_king = piece.is_king;
    DIAGONALS
        .into_iter()
        .filter(move |(dr, _)| is_king || *dr == forward)
}

pub fn legal_moves(board: &BoardState, piece: &Piece) -> LegalMoves {
    let mut candidates = Vec::with_capacity(4);
    let origin = piece.position();

    for (dr, dc) in directions_for(piece) {
        let Some(adjacent) = origin.offset(dr, dc) else {
            continue;
        };

        match board.cell(adjacent) {
            Cell::Empty => candidates.push(MoveCandidate {
                dest: adjacent,
                captured: None,
            }),
            Cell::Occupied(target) => {
                if target.side == piece.side || !may_capture(piece.element, target.element) {
                    continue;
                }
                let Some(landing) = adjacent.offset(dr, dc) else {
                    continue;
                };
                if board.is_empty_at(landing) {
                    candidates.push(MoveCandidate {
                        dest: landing,
                        captured: Some(adjacent),
                    });
                }
            }
        }
    }

    LegalMoves { candidates }
}

/// Whether any piece of `side` has at least one legal destination.
pub fn side_has_any_move(board: &BoardState, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|piece| !legal_moves(board, piece).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::parse_board_diagram;

    fn board(diagram: &str) -> BoardState {
        parse_board_diagram(diagram).expect("diagram should parse")
    }

    fn piece_at(board: &BoardState, row: u8, col: u8) -> Piece {
        *board
            .piece_at(Position::new(row, col))
            .expect("fixture piece should exist")
    }

    #[test]
    fn bottom_man_steps_toward_row_zero() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . bf . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 5, 3));
        let dests: Vec<_> = moves.iter().map(|m| m.dest).collect();
        assert_eq!(dests, vec![Position::new(4, 2), Position::new(4, 4)]);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn top_man_steps_toward_row_seven() {
        let b = board(
            "
            . . . . . . . .
            . . tw . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 1, 2));
        let dests: Vec<_> = moves.iter().map(|m| m.dest).collect();
        assert_eq!(dests, vec![Position::new(2, 1), Position::new(2, 3)]);
    }

    #[test]
    fn king_moves_in_all_four_directions() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . Be . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 3, 4));
        let dests: Vec<_> = moves.iter().map(|m| m.dest).collect();
        assert_eq!(
            dests,
            vec![
                Position::new(2, 3),
                Position::new(2, 5),
                Position::new(4, 3),
                Position::new(4, 5),
            ]
        );
    }

    #[test]
    fn edge_piece_has_single_direction() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ba . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 7, 0));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves.get(Position::new(6, 1)), Some(None));
    }

    #[test]
    fn fire_captures_air_but_air_cannot_capture_fire() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . ta . . .
            . . . bf . . . .
            . . . . . . . .
            ",
        );
        let fire = legal_moves(&b, &piece_at(&b, 6, 3));
        assert_eq!(fire.get(Position::new(4, 5)), Some(Some(Position::new(5, 4))));

        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . tf . . .
            . . . ba . . . .
            . . . . . . . .
            ",
        );
        let air = legal_moves(&b, &piece_at(&b, 6, 3));
        assert!(!air.contains(Position::new(4, 5)));
        assert_eq!(air.len(), 1, "only the quiet step to (5,2) remains");
    }

    #[test]
    fn water_captures_fire() {
        let b = board(
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
        );
        let moves = legal_moves(&b, &piece_at(&b, 6, 3));
        assert_eq!(moves.get(Position::new(4, 1)), Some(Some(Position::new(5, 2))));
    }

    #[test]
    fn neutral_and_same_element_captures_are_allowed() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . te . tf . . .
            . . . bf . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 6, 3));
        assert_eq!(moves.get(Position::new(4, 1)), Some(Some(Position::new(5, 2))));
        assert_eq!(moves.get(Position::new(4, 5)), Some(Some(Position::new(5, 4))));
    }

    #[test]
    fn blocked_or_off_board_landing_yields_nothing() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . tw . .
            . . . . tw . . .
            . . . bw . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 6, 3));
        assert!(!moves.contains(Position::new(4, 5)));

        let b = board(
            "
            . . . . . . . .
            tw . . . . . . .
            . bw . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 2, 1));
        let dests: Vec<_> = moves.iter().map(|m| m.dest).collect();
        assert_eq!(dests, vec![Position::new(1, 2)]);
    }

    #[test]
    fn own_pieces_block_without_capture() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . be . be . . .
            . . . bf . . . .
            . . . . . . . .
            ",
        );
        assert!(legal_moves(&b, &piece_at(&b, 6, 3)).is_empty());
    }

    #[test]
    fn capture_is_optional_alongside_quiet_moves() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . tw . . . . .
            . . . bw . . . .
            . . . . . . . .
            ",
        );
        let moves = legal_moves(&b, &piece_at(&b, 6, 3));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Position::new(4, 1)));
        assert!(moves.contains(Position::new(5, 4)));
    }

    #[test]
    fn destinations_are_empty_and_forward_on_opening_boards() {
        use rand::{rngs::StdRng, SeedableRng};

        for seed in 0..8 {
            let b = BoardState::new_game(&mut StdRng::seed_from_u64(seed));
            for piece in b.pieces() {
                for candidate in &legal_moves(&b, piece) {
                    assert!(b.is_empty_at(candidate.dest));
                    let dr = candidate.dest.row as i8 - piece.row as i8;
                    assert_eq!(dr.signum(), piece.side.forward());
                }
            }
        }
    }

    #[test]
    fn side_has_any_move_detects_blocked_side() {
        let b = board(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . tf . . . . . .
            ba . . . . . . .
            ",
        );
        // Air may not jump Fire, and the Bottom man has no other direction.
        assert!(!side_has_any_move(&b, Side::Bottom));
        assert!(side_has_any_move(&b, Side::Top));
    }
}
