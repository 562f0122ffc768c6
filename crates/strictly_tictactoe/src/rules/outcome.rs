//! Board outcome evaluation.

use super::{check_winner, is_full};
use crate::{Board, EngineError, Outcome};

/// Evaluates a board: a completed line wins, otherwise a full board is a
/// draw, otherwise the game is undecided.
///
/// Total over every combination of squares, including boards that legal
/// play cannot reach.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

/// Fails unless `board` has an empty square and no winner yet.
pub(crate) fn ensure_playable(board: &Board) -> Result<(), EngineError> {
    match evaluate(board) {
        Outcome::Undecided => Ok(()),
        _ if is_full(board) => Err(EngineError::NoLegalMoves),
        outcome => Err(EngineError::GameOver(outcome)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_ensure_playable() {
        assert_eq!(ensure_playable(&Board::new()), Ok(()));

        let full: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(ensure_playable(&full), Err(EngineError::NoLegalMoves));

        let won: Board = "OOO/XX_/___".parse().unwrap();
        assert_eq!(
            ensure_playable(&won),
            Err(EngineError::GameOver(Outcome::Win(Player::O)))
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board: Board = "O_X/XO_/__O".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::O));
    }
}
