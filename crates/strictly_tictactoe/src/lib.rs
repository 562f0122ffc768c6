//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and [`Outcome`] value types
//! - **Rules**: the stateless evaluator ([`evaluate`]) and its building blocks
//! - **Search**: depth-bounded minimax with alpha-beta pruning ([`Minimax`])
//! - **Difficulty**: move selection policy per tier ([`select_move`])
//! - **Game**: typestate wrapper enforcing alternating turns ([`Game`])
//!
//! Every operation is synchronous and side-effect free. Boards are `Copy`
//! values, so a search branch can never alias its parent's board.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Outcome, Position, evaluate, minimax_search};
//!
//! let board: Board = "OO_/XX_/___".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::Undecided);
//!
//! let result = minimax_search(&board).unwrap();
//! assert_eq!(*result.position(), Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use difficulty::{ComputerPlayer, Difficulty, best_move, select_move};
pub use error::EngineError;
pub use game::{Draw, Game, GameTransition, InProgress, Won};
pub use position::Position;
pub use rules::{WIN_CONDITIONS, WinCondition, check_winner, evaluate, is_full};
pub use search::{
    LOSS_BASE, Minimax, SearchResult, SearchStats, WIN_BASE, exhaustive_search, minimax_search,
};
pub use types::{Board, Outcome, Player, Square};

/// The side the engine plays by default (the human is always X).
pub const COMPUTER: Player = Player::O;
