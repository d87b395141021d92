//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use elemental_checkers::engines::engine_minimax::MinimaxEngine;
use elemental_checkers::engines::engine_random::RandomEngine;
use elemental_checkers::engines::engine_trait::Engine;
use elemental_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap these to compare depths or scorers.
    let player1 = || Box::new(MinimaxEngine::new(3)) as Box<dyn Engine>;
    let mut opponent_seed = 0u64;
    let player2 = || {
        opponent_seed += 1;
        Box::new(RandomEngine::with_seed(opponent_seed)) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig { max_plies: 200 },
            verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
