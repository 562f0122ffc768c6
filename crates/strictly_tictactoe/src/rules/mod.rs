//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can call them on any snapshot.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::evaluate;
pub use win::{WIN_CONDITIONS, WinCondition, check_winner};
