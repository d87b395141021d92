//! Random-move engine.
//!
//! Picks uniformly among successor boards. Used as a baseline opponent by the
//! match harness and for diagnostics.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Side;
use crate::move_generation::move_generator::{ElementalMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: ElementalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: ElementalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Elemental Random"
    }

    fn choose_move(&mut self, board: &BoardState, side: Side) -> EngineOutput {
        let moves = self.move_generator.generate_moves(board, side);
        debug!("random side={:?} legal_moves={}", side, moves.len());

        EngineOutput {
            best_board: moves
                .as_slice()
                .choose(&mut self.rng)
                .map(|mv| mv.board_after.clone()),
            score: None,
        }
    }
}
