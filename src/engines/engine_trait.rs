//! Engine abstraction layer used by the game driver and match harness.
//!
//! An engine receives the live board and the side it plays, and answers with
//! the successor board it wants to adopt. The caller swaps that board in; there
//! is no separate move-application step for automated players.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Side;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when `side` has no legal move, which means it has lost.
    pub best_board: Option<BoardState>,
    pub score: Option<f64>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &BoardState, side: Side) -> EngineOutput;
}
