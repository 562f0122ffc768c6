//! Strictly Games - terminal tic-tac-toe against a minimax opponent.
//!
//! # Architecture
//!
//! - **Engine**: [`strictly_tictactoe`] evaluator, search and move policy,
//!   re-exported here
//! - **Config**: [`EngineConfig`] loaded from TOML
//! - **Session**: [`run_session`], the interactive human-vs-computer loop
//!
//! # Example
//!
//! ```
//! use strictly_games::{Board, Difficulty, Position, best_move};
//!
//! let board: Board = "XX_/O__/__O".parse().unwrap();
//! let mut rng = rand::rng();
//! assert_eq!(best_move(&board, Difficulty::Hard, &mut rng).unwrap(), Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

pub use config::{ConfigError, EngineConfig};
pub use session::{SessionSummary, run_session};

pub use strictly_tictactoe::{
    Board, COMPUTER, ComputerPlayer, Difficulty, EngineError, Game, GameTransition, InProgress,
    Minimax, Outcome, Player, Position, SearchResult, SearchStats, Square, best_move,
    evaluate, exhaustive_search, minimax_search, select_move,
};
