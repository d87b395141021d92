use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Leaf statistics of a fixed-depth successor tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Count leaves `depth` plies below `board`, with `side` to move first.
///
/// Capture and promotion counts describe the final ply only.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &BoardState,
    side: Side,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, side) {
        perft_recurse(generator, &mv, side.opposite(), depth, &mut total);
    }
    total
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    next_side: Side,
    depth: u8,
    total: &mut PerftCounts,
) {
    if depth == 1 {
        total.merge(PerftCounts {
            nodes: 1,
            captures: usize::from(mv.candidate.is_capture()),
            promotions: usize::from(mv.promoted),
        });
        return;
    }

    total.merge(perft(generator, &mv.board_after, next_side, depth - 1));
}
