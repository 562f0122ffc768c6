//! Typestate-based game for tic-tac-toe.
//!
//! The game phase is encoded in the type parameter, so a finished game
//! cannot accept moves and only a won game has a winner.

use crate::rules::evaluate;
use crate::{Board, EngineError, Outcome, Player, Position};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: Game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: Game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: Game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// - `Game<InProgress>` - game is ongoing, moves can be made
/// - `Game<Won>` - game ended with a winner
/// - `Game<Draw>` - game ended in a draw
///
/// "Play again" is simply a new `Game<InProgress>`.
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
    _state: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with next player.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl GameTransition {
    /// Outcome after the move.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameTransition::InProgress(game) => game.outcome(),
            GameTransition::Won(game) => game.outcome(),
            GameTransition::Draw(game) => game.outcome(),
        }
    }

    /// Board after the move.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::InProgress(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Draw(game) => game.board(),
        }
    }
}

impl Game<InProgress> {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Places the current player's mark, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, EngineError> {
        self.board = self.board.place(pos, self.to_move)?;
        self.history.push(pos);

        Ok(match evaluate(&self.board) {
            Outcome::Win(_) => GameTransition::Won(self.into_phase()),
            Outcome::Draw => GameTransition::Draw(self.into_phase()),
            Outcome::Undecided => {
                self.to_move = self.to_move.opponent();
                GameTransition::InProgress(self)
            }
        })
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    fn into_phase<T>(self) -> Game<T> {
        Game {
            board: self.board,
            to_move: self.to_move,
            history: self.history,
            _state: PhantomData,
        }
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }
}

impl Game<Won> {
    /// Returns the winner of the game: the player who moved last.
    pub fn winner(&self) -> Player {
        self.to_move
    }
}
