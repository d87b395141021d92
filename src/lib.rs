//! Crate root module declarations for the elemental checkers engine.
//!
//! Exposes the rules core (board state, elements, move generation), the
//! minimax search, the engine abstraction, the interactive game engine, and
//! utility helpers so binaries, benches, and tests share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod elements;
}

pub mod move_generation {
    pub mod legal_moves;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_engine;
}

pub mod utils {
    pub mod board_diagram;
    pub mod engine_match_harness;
    pub mod render_board;
}
