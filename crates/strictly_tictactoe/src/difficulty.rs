//! Computer move selection per difficulty tier.

use crate::rules::outcome::ensure_playable;
use crate::{Board, COMPUTER, EngineError, Minimax, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer tries.
///
/// `Medium` currently plays exactly like `Easy`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    #[default]
    Easy,
    /// Same as `Easy`.
    Medium,
    /// Minimax with alpha-beta pruning; never loses.
    Hard,
}

/// Picks a move for `player` on `board`.
///
/// # Errors
///
/// - [`EngineError::NoLegalMoves`] if the board is full.
/// - [`EngineError::GameOver`] if the board already has a winner.
#[instrument(skip(board, rng), fields(board = %board.to_compact()))]
pub fn select_move<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, EngineError> {
    ensure_playable(board)?;

    let position = match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            let available = board.empty_positions();
            available[rng.random_range(0..available.len())]
        }
        Difficulty::Hard => *Minimax::new(player).search(board)?.position(),
    };

    debug!(%position, "Computer chose position");
    Ok(position)
}

/// Picks the computer's (O's) move on `board`.
pub fn best_move<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, EngineError> {
    select_move(board, COMPUTER, difficulty, rng)
}

/// A computer opponent with its own random source.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    mark: Player,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the OS.
    pub fn new(mark: Player, difficulty: Difficulty) -> Self {
        Self {
            mark,
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a computer player with reproducible random choices.
    pub fn seeded(mark: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            mark,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The mark this player places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The tier in use.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the tier for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a move on `board`.
    pub fn choose(&mut self, board: &Board) -> Result<Position, EngineError> {
        select_move(board, self.mark, self.difficulty, &mut self.rng)
    }
}
