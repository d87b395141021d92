use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use elemental_checkers::game_state::board_state::BoardState;
use elemental_checkers::game_state::checkers_types::Side;
use elemental_checkers::move_generation::move_generator::{ElementalMoveGenerator, MoveGenerator};
use elemental_checkers::move_generation::perft::perft;
use elemental_checkers::search::board_scoring::ElementalMaterialScorer;
use elemental_checkers::search::minimax::{minimax, minimax_exhaustive};

/// Opening board advanced by `plies` seeded random moves.
fn midgame_board(seed: u64, plies: usize) -> (BoardState, Side) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = BoardState::new_game(&mut rng);
    let mut side = Side::Bottom;
    for _ in 0..plies {
        let mut moves = ElementalMoveGenerator.generate_moves(&board, side);
        if moves.is_empty() {
            break;
        }
        let idx = rng.random_range(0..moves.len());
        board = moves.swap_remove(idx).board_after;
        side = side.opposite();
    }
    (board, side)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    for (name, plies) in [("opening", 0usize), ("midgame", 12)] {
        let (board, side) = midgame_board(99, plies);
        let maximizing = side == Side::Bottom;

        group.bench_with_input(BenchmarkId::new("alpha_beta_d3", name), &board, |b, board| {
            b.iter(|| {
                black_box(minimax(
                    black_box(board),
                    3,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    maximizing,
                    &ElementalMoveGenerator,
                    &ElementalMaterialScorer,
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("exhaustive_d3", name), &board, |b, board| {
            b.iter(|| {
                black_box(minimax_exhaustive(
                    black_box(board),
                    3,
                    maximizing,
                    &ElementalMoveGenerator,
                    &ElementalMaterialScorer,
                ))
            })
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let (board, side) = midgame_board(7, 0);

    for depth in 1..=4u8 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(&ElementalMoveGenerator, black_box(&board), side, depth)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_perft);
criterion_main!(benches);
