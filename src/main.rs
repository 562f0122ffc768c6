//! Strictly Games - Unified CLI
//!
//! Terminal tic-tac-toe with several modes of operation.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use strictly_games::{
    Board, COMPUTER, ComputerPlayer, Difficulty, EngineConfig, Minimax, Outcome, Player,
    evaluate, minimax_search, run_session,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    initialize_tracing();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { difficulty, seed } => run_play(with_overrides(config, difficulty, seed)),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::BestMove {
            board,
            difficulty,
            seed,
            json,
        } => run_best_move(&board, &with_overrides(config, difficulty, seed), json),
        Command::SelfPlay { games } => run_self_play(games),
    }
}

/// Logs go to stderr so board output on stdout stays clean.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_games=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn with_overrides(
    mut config: EngineConfig,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> EngineConfig {
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config
}

/// Run the interactive game on stdin/stdout
#[instrument]
fn run_play(config: EngineConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let summary = run_session(stdin.lock(), std::io::stdout(), &config)?;
    info!(games = summary.games(), "Session ended");
    Ok(())
}

/// Print the outcome of a board
#[instrument]
fn run_evaluate(board: &str, as_json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let outcome = evaluate(&board);

    if as_json {
        println!(
            "{}",
            json!({ "board": board.to_compact(), "outcome": outcome })
        );
    } else {
        println!("{}\n\n{}", board, outcome);
    }
    Ok(())
}

/// Print the computer's move for a board
#[instrument(skip(config))]
fn run_best_move(board: &str, config: &EngineConfig, as_json: bool) -> Result<()> {
    let board: Board = board.parse()?;

    let (position, score) = match config.difficulty() {
        Difficulty::Hard => {
            let result = minimax_search(&board)?;
            (*result.position(), Some(*result.score()))
        }
        difficulty => {
            let mut computer = match config.seed() {
                Some(seed) => ComputerPlayer::seeded(COMPUTER, *difficulty, *seed),
                None => ComputerPlayer::new(COMPUTER, *difficulty),
            };
            (computer.choose(&board)?, None)
        }
    };

    if as_json {
        println!(
            "{}",
            json!({
                "board": board.to_compact(),
                "difficulty": config.difficulty(),
                "position": position,
                "index": position.to_index(),
                "score": score,
            })
        );
    } else {
        match score {
            Some(score) => println!("{} (index {}, score {})", position, position.to_index(), score),
            None => println!("{} (index {})", position, position.to_index()),
        }
    }
    Ok(())
}

/// Play hard against hard and print each result
#[instrument]
fn run_self_play(games: u32) -> Result<()> {
    for game in 1..=games {
        let mut board = Board::new();
        let mut mover = Player::X;

        let outcome = loop {
            match evaluate(&board) {
                Outcome::Undecided => {}
                outcome => break outcome,
            }
            let result = Minimax::new(mover).search(&board)?;
            board = board.place(*result.position(), mover)?;
            mover = mover.opponent();
        };

        info!(game, %outcome, "Self-play game finished");
        println!("Game {}: {}\n{}\n", game, outcome, board);
    }
    Ok(())
}
