//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// Three positions forming a row, column or diagonal.
pub type WinCondition = [Position; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
pub const WIN_CONDITIONS: [WinCondition; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`WIN_CONDITIONS`]
/// order, `None` otherwise. Unreachable boards with two complete lines
/// are not rejected.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_CONDITIONS {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}
