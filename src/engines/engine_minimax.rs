//! Fixed-depth minimax engine.
//!
//! Wraps `search_best_board` with the elemental move generator and scorer.
//! It maximizes when playing Bottom and minimizes when playing Top.

use std::time::Instant;

use log::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::ElementalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, ElementalMaterialScorer};
use crate::search::minimax::{search_best_board, SearchConfig, SearchResult};

pub struct MinimaxEngine<S: BoardScorer = ElementalMaterialScorer> {
    generator: ElementalMoveGenerator,
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<ElementalMaterialScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(ElementalMaterialScorer, SearchConfig { depth })
    }
}

impl Default for MinimaxEngine<ElementalMaterialScorer> {
    fn default() -> Self {
        Self::with_scorer(ElementalMaterialScorer, SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    /// Depth is clamped to at least one ply: a depth-0 search returns the
    /// input board, which is not a move.
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        if config.depth == 0 {
            warn!("minimax depth 0 requested, searching 1 ply instead");
        }
        Self {
            generator: ElementalMoveGenerator,
            scorer,
            config: SearchConfig {
                depth: config.depth.max(1),
            },
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run the search and return the full result, statistics included.
    pub fn search(&self, board: &BoardState, side: Side) -> SearchResult {
        search_best_board(board, side, &self.generator, &self.scorer, self.config)
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Elemental Minimax"
    }

    fn choose_move(&mut self, board: &BoardState, side: Side) -> EngineOutput {
        let started = Instant::now();
        let result = self.search(board, side);

        debug!(
            "minimax side={:?} depth={} score={} nodes={} leaves={} cutoffs={} found={} elapsed_ms={:.3}",
            side,
            self.config.depth,
            result.score,
            result.stats.nodes,
            result.stats.leaves,
            result.stats.cutoffs,
            result.best_board.is_some(),
            started.elapsed().as_secs_f64() * 1000.0
        );

        EngineOutput {
            score: result.best_board.as_ref().map(|_| result.score),
            best_board: result.best_board,
        }
    }
}
