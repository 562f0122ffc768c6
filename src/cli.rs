//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Difficulty;

/// Strictly Games - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against an alpha-beta minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(long, global = true, default_value = "strictly_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game as X against the computer
    Play {
        /// Computer difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the random difficulty tiers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate a board, e.g. "XOX/XOO/OXX"
    Evaluate {
        /// Nine cells: X, O and _ (or . or -), separators / and | allowed
        #[arg(short, long)]
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Choose the computer's (O's) move on a board
    BestMove {
        /// Nine cells: X, O and _ (or . or -), separators / and | allowed
        #[arg(short, long)]
        board: String,

        /// Computer difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the random difficulty tiers
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play the hard engine against itself from an empty board
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
