//! Core domain types for tic-tac-toe.

use crate::{EngineError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first, the human).
    X,
    /// Player O (goes second, the computer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '_' | '.' | '-' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable snapshots: [`Board::place`] returns a new board and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SquareOccupied`] if the square is taken.
    pub fn place(&self, pos: Position, player: Player) -> Result<Self, EngineError> {
        if !self.is_empty(pos) {
            return Err(EngineError::SquareOccupied(pos));
        }
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        Ok(next)
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the board with every X and O swapped.
    pub fn relabeled(&self) -> Self {
        let mut squares = self.squares;
        for square in &mut squares {
            if let Square::Occupied(player) = square {
                *player = player.opponent();
            }
        }
        Self { squares }
    }

    /// Compact 9-symbol form (`X`, `O`, `_`), accepted by [`FromStr`].
    pub fn to_compact(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses 9 cell symbols, ignoring whitespace and `/` or `|` separators.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if symbols.len() != 9 {
            return Err(EngineError::MalformedBoard(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(symbols) {
            *square = Square::from_symbol(c).ok_or_else(|| {
                EngineError::MalformedBoard(format!("invalid cell symbol {:?}", c))
            })?;
        }

        Ok(Self { squares })
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = EngineError;

    fn try_from(squares: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; 9] = squares.try_into().map_err(|_| {
            EngineError::MalformedBoard(format!("expected 9 cells, found {}", squares.len()))
        })?;
        Ok(Self { squares })
    }
}

impl std::fmt::Display for Board {
    /// Grid form with empty squares numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Result of evaluating a board.
///
/// Exactly one variant holds for any board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    #[display("Undecided")]
    Undecided,
    /// A player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The board is full with no completed line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Swaps the winner; `Draw` and `Undecided` are unchanged.
    pub fn relabeled(self) -> Self {
        match self {
            Outcome::Win(player) => Outcome::Win(player.opponent()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(Position::Center, Player::X).unwrap();
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_occupied_square() {
        let board = Board::new().place(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Player::O),
            Err(EngineError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "X O X / . O . | x _ o".parse().unwrap();
        assert_eq!(board.to_compact(), "XOX_O_X_O");
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 3);
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "XOX".parse::<Board>().unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard(_)));
    }

    #[test]
    fn test_parse_invalid_symbol() {
        let err = "XOXZ_____".parse::<Board>().unwrap_err();
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn test_try_from_slice_wrong_size() {
        let squares = [Square::Empty; 8];
        assert!(Board::try_from(&squares[..]).is_err());
    }

    #[test]
    fn test_relabeled_swaps_marks() {
        let board: Board = "XO_______".parse().unwrap();
        assert_eq!(board.relabeled().to_compact(), "OX_______");
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_serde_round_trip() {
        let board: Board = "XO__X___O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
