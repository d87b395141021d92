//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on seeded opening
//! boards without any terminal I/O, and aggregates series statistics.

use std::time::Instant;

use chrono::{DateTime, Local};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::errors::{CheckersError, CheckersResult};
use crate::game::game_engine::{EngineTurn, GameEngine, GameResult, WinReason};
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(GameResult),
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin {
        player: PlayerId,
        side: Side,
        reason: WinReason,
    },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: BoardState,
    pub plies: u16,
    pub started_at: DateTime<Local>,
    pub bottom_total_time_ns: u128,
    pub top_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play one match from a board seeded with `seed`. Bottom moves first.
pub fn play_engine_match(
    engine_bottom: &mut dyn Engine,
    engine_top: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> MatchResult {
    let mut rng = StdRng::seed_from_u64(seed);
    play_engine_match_from_board(
        BoardState::new_game(&mut rng),
        engine_bottom,
        engine_top,
        config,
    )
}

pub fn play_engine_match_from_board(
    board: BoardState,
    engine_bottom: &mut dyn Engine,
    engine_top: &mut dyn Engine,
    config: &MatchConfig,
) -> MatchResult {
    let started_at = Local::now();
    let mut game = GameEngine::new(board);
    let mut times = [0u128; 2];
    let mut plies = 0u16;

    engine_bottom.new_game();
    engine_top.new_game();

    let outcome = loop {
        if let Some(result) = game.check_winner() {
            break MatchOutcome::Win(result);
        }
        if plies >= config.max_plies {
            break MatchOutcome::DrawMaxPlies;
        }

        let side = game.turn();
        let engine: &mut dyn Engine = match side {
            Side::Bottom => &mut *engine_bottom,
            Side::Top => &mut *engine_top,
        };

        let t0 = Instant::now();
        let turn = game.play_engine_turn(engine);
        times[side.index()] += t0.elapsed().as_nanos();

        match turn {
            EngineTurn::Played { .. } => plies += 1,
            EngineTurn::NoMove => {
                break MatchOutcome::Win(GameResult {
                    winner: side.opposite(),
                    reason: WinReason::NoLegalMoves,
                })
            }
        }
    };

    debug!("match finished after {plies} plies: {outcome:?}");

    MatchResult {
        outcome,
        final_board: game.board().clone(),
        plies,
        started_at,
        bottom_total_time_ns: times[Side::Bottom.index()],
        top_total_time_ns: times[Side::Top.index()],
    }
}

/// Play `config.games` seeded matches, alternating which player takes Bottom.
pub fn play_engine_match_series<F1, F2>(
    mut make_player1: F1,
    mut make_player2: F2,
    config: MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: FnMut() -> Box<dyn Engine>,
    F2: FnMut() -> Box<dyn Engine>,
{
    if config.games == 0 {
        return Err(CheckersError::InvalidInput(
            "a match series needs at least one game".to_owned(),
        ));
    }

    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game_idx in 0..config.games {
        let mut p1 = make_player1();
        let mut p2 = make_player2();
        let p1_side = if game_idx % 2 == 0 {
            Side::Bottom
        } else {
            Side::Top
        };
        let seed = config.base_seed.wrapping_add(u64::from(game_idx));

        let result = match p1_side {
            Side::Bottom => play_engine_match(p1.as_mut(), p2.as_mut(), seed, &config.per_game),
            Side::Top => play_engine_match(p2.as_mut(), p1.as_mut(), seed, &config.per_game),
        };

        let (p1_time, p2_time) = match p1_side {
            Side::Bottom => (result.bottom_total_time_ns, result.top_total_time_ns),
            Side::Top => (result.top_total_time_ns, result.bottom_total_time_ns),
        };
        let p1_moves = moves_made_by(p1_side, result.plies);
        let p2_moves = moves_made_by(p1_side.opposite(), result.plies);
        stats.player1_total_time_ns += p1_time;
        stats.player2_total_time_ns += p2_time;
        stats.player1_moves += p1_moves;
        stats.player2_moves += p2_moves;

        let series_outcome = match result.outcome {
            MatchOutcome::Win(game_result) => {
                let player = if game_result.winner == p1_side {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin {
                    player,
                    side: game_result.winner,
                    reason: game_result.reason,
                }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(series_outcome);

        if config.verbose {
            info!(
                "game {} started {} seed={} p1_side={} plies={} outcome={:?}",
                game_idx + 1,
                result.started_at.format("%Y-%m-%d %H:%M:%S"),
                seed,
                p1_side,
                result.plies,
                series_outcome
            );
        }
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);
    Ok(stats)
}

/// Moves made by `side` in a game of `plies` half-moves where Bottom starts.
fn moves_made_by(side: Side, plies: u16) -> u32 {
    let plies = u32::from(plies);
    match side {
        Side::Bottom => plies.div_ceil(2),
        Side::Top => plies / 2,
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
