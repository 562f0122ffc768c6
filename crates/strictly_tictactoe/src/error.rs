//! Engine error types.

use crate::{Outcome, Position};

/// Contract violations reported by the engine.
///
/// None of these are recoverable by retrying: the engine is deterministic,
/// so the caller must fix its input instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// Board text or cell data that does not describe a 9-cell board.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(#[error(not(source))] String),

    /// The board already has a result, so there is no move to search for.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// Every square is occupied.
    #[display("No legal moves: the board is full")]
    NoLegalMoves,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_messages_name_the_problem() {
        let err = EngineError::SquareOccupied(Position::Center);
        assert_eq!(err.to_string(), "Square Center is already occupied");

        let err = EngineError::GameOver(Outcome::Win(Player::X));
        assert!(err.to_string().contains("X wins"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EngineError::NoLegalMoves);
    }
}
