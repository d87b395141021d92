//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Bottom is the maximizing side. The search returns the best successor board
//! rather than a move descriptor, so callers can adopt the result wholesale.
//! Ties keep the first successor seen: a later successor replaces the
//! incumbent only with a strictly better score.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    /// `None` when the side to move had no successor. A depth-zero search
    /// returns the searched board itself.
    pub best_board: Option<BoardState>,
    pub stats: SearchStats,
}

/// Side to move at a node, from the maximizing flag.
#[inline]
pub const fn side_for(maximizing: bool) -> Side {
    if maximizing {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Alpha-beta minimax from `board`.
///
/// At `depth == 0` the result is the static score and a copy of `board`
/// itself. A node whose side has no successors keeps its sentinel score
/// (`-inf` when maximizing, `+inf` when minimizing) and no best board.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    board: &BoardState,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    generator: &G,
    scorer: &S,
) -> SearchResult {
    let mut stats = SearchStats::default();
    let (score, best_board) = alpha_beta(
        board, depth, alpha, beta, maximizing, generator, scorer, &mut stats,
    );
    SearchResult {
        score,
        best_board,
        stats,
    }
}

/// Root search at `config.depth` with an open window.
pub fn search_best_board<G: MoveGenerator, S: BoardScorer>(
    board: &BoardState,
    side: Side,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    minimax(
        board,
        config.depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        side == Side::Bottom,
        generator,
        scorer,
    )
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<G: MoveGenerator, S: BoardScorer>(
    board: &BoardState,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    generator: &G,
    scorer: &S,
    stats: &mut SearchStats,
) -> (f64, Option<BoardState>) {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return (scorer.score(board), Some(board.clone()));
    }

    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_board = None;

    for mv in generator.generate_moves(board, side_for(maximizing)) {
        let (score, _) = alpha_beta(
            &mv.board_after,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            generator,
            scorer,
            stats,
        );

        if maximizing {
            if score > best_score {
                best_score = score;
                best_board = Some(mv.board_after);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_board = Some(mv.board_after);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (best_score, best_board)
}

/// Full-width minimax with the same ordering and tie-break, no pruning.
///
/// Reference for validating the pruned search; exponentially slower.
pub fn minimax_exhaustive<G: MoveGenerator, S: BoardScorer>(
    board: &BoardState,
    depth: u8,
    maximizing: bool,
    generator: &G,
    scorer: &S,
) -> SearchResult {
    let mut stats = SearchStats::default();
    let (score, best_board) = full_width(board, depth, maximizing, generator, scorer, &mut stats);
    SearchResult {
        score,
        best_board,
        stats,
    }
}

fn full_width<G: MoveGenerator, S: BoardScorer>(
    board: &BoardState,
    depth: u8,
    maximizing: bool,
    generator: &G,
    scorer: &S,
    stats: &mut SearchStats,
) -> (f64, Option<BoardState>) {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return (scorer.score(board), Some(board.clone()));
    }

    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_board = None;

    for mv in generator.generate_moves(board, side_for(maximizing)) {
        let (score, _) = full_width(&mv.board_after, depth - 1, !maximizing, generator, scorer, stats);
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_board = Some(mv.board_after);
        }
    }

    (best_score, best_board)
}
