//! Terminal front end: the human plays Bottom, minimax plays Top.
//!
//! Run with:
//! `cargo run --release -- --seed 7 --depth 3`
//! Enter `row col` to click a cell, `q` to quit. `RUST_LOG=debug` shows
//! search statistics.

use std::io::{self, BufRead, Write};

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use elemental_checkers::engines::engine_minimax::MinimaxEngine;
use elemental_checkers::errors::{CheckersError, CheckersResult};
use elemental_checkers::game::game_engine::{EngineTurn, GameEngine, SelectOutcome};
use elemental_checkers::game_state::board_state::BoardState;
use elemental_checkers::game_state::checkers_rules::DEFAULT_SEARCH_DEPTH;
use elemental_checkers::game_state::checkers_types::{Side, BOARD_SIZE};
use elemental_checkers::utils::render_board::{render_board, render_status};

struct Options {
    seed: Option<u64>,
    depth: u8,
}

fn parse_options<I>(args: I) -> CheckersResult<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options {
        seed: None,
        depth: DEFAULT_SEARCH_DEPTH,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| CheckersError::InvalidInput(format!("{name} needs a value")))
        };
        match arg.as_str() {
            "--seed" => {
                let raw = value("--seed")?;
                options.seed = Some(raw.parse().map_err(|_| {
                    CheckersError::InvalidInput(format!("--seed expects an integer, got '{raw}'"))
                })?);
            }
            "--depth" => {
                let raw = value("--depth")?;
                options.depth = raw.parse().map_err(|_| {
                    CheckersError::InvalidInput(format!("--depth expects an integer, got '{raw}'"))
                })?;
                if options.depth == 0 {
                    return Err(CheckersError::InvalidInput(
                        "--depth must be at least 1".to_owned(),
                    ));
                }
            }
            other => {
                return Err(CheckersError::InvalidInput(format!(
                    "unknown argument '{other}'"
                )))
            }
        }
    }

    Ok(options)
}

/// Parse a `row col` click.
fn parse_click(line: &str) -> CheckersResult<(u8, u8)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(CheckersError::InvalidInput(
            "expected two numbers: row col".to_owned(),
        ));
    };
    let row: i64 = row
        .parse()
        .map_err(|_| CheckersError::InvalidInput(format!("'{row}' is not a number")))?;
    let col: i64 = col
        .parse()
        .map_err(|_| CheckersError::InvalidInput(format!("'{col}' is not a number")))?;

    let size = i64::from(BOARD_SIZE);
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return Err(CheckersError::OutOfBounds { row, col });
    }
    Ok((row as u8, col as u8))
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_options(std::env::args().skip(1)).map_err(|e| e.to_string())?;
    let mut game = match options.seed {
        Some(seed) => GameEngine::new_game(&mut StdRng::seed_from_u64(seed)),
        None => GameEngine::new(BoardState::new_random_game()),
    };
    let mut agent = MinimaxEngine::new(options.depth);
    info!("new game: seed={:?} depth={}", options.seed, options.depth);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let selected = game.selected().map(|piece| piece.position());
        println!("{}", render_board(game.board(), selected));
        println!("{}", render_status(game.turn(), game.board()));

        if let Some(result) = game.check_winner() {
            println!("Game over: {result}");
            info!("game over: {result}");
            return Ok(());
        }

        if game.turn() == Side::Top {
            if let EngineTurn::NoMove = game.play_engine_turn(&mut agent) {
                println!("Game over: Top has no legal moves");
                return Ok(());
            }
            continue;
        }

        print!("row col> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed == "q" || trimmed == "quit" {
            return Ok(());
        }

        match parse_click(trimmed) {
            Ok((row, col)) => match game.select(row, col) {
                SelectOutcome::Selected(pos) => println!("selected ({}, {})", pos.row, pos.col),
                SelectOutcome::Moved(record) => {
                    if let Some(captured) = record.captured {
                        println!("captured piece at ({}, {})", captured.row, captured.col);
                    }
                    if record.promoted {
                        println!("crowned!");
                    }
                }
                SelectOutcome::Ignored => println!("nothing to select there"),
            },
            Err(err) => println!("{err}"),
        }
    }
}
