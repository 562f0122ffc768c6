//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Scores are from the maximizer's point of view: a win scores
//! `WIN_BASE - depth` so faster wins rank higher, a loss scores
//! `LOSS_BASE + depth` so later losses rank higher, and a draw scores 0.

use crate::rules::{evaluate, outcome::ensure_playable};
use crate::{Board, COMPUTER, EngineError, Outcome, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a maximizer win found at depth 0.
pub const WIN_BASE: i32 = 10;

/// Score of a minimizer win found at depth 0.
pub const LOSS_BASE: i32 = -10;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchStats {
    /// Positions evaluated, root included.
    nodes: u64,
    /// Branches cut off by alpha-beta.
    cutoffs: u64,
}

/// Best move found at the root of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchResult {
    /// Minimax value of the position for the maximizer.
    score: i32,
    /// First position (ascending index) achieving `score`.
    position: Position,
    /// Work done to find it.
    stats: SearchStats,
}

/// Minimax searcher for one side.
///
/// Holds no state between searches; each call to [`Minimax::search`] is
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Player,
    pruning: bool,
}

impl Minimax {
    /// Alpha-beta searcher playing `maximizer`.
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            pruning: true,
        }
    }

    /// Plain minimax searcher playing `maximizer`, with no pruning.
    pub fn exhaustive(maximizer: Player) -> Self {
        Self {
            maximizer,
            pruning: false,
        }
    }

    /// The side this searcher maximizes for.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Searches `board` for the maximizer's best move.
    ///
    /// The caller is responsible for it being the maximizer's turn.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLegalMoves`] if the board is full.
    /// - [`EngineError::GameOver`] if the board already has a winner.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer, board = %board.to_compact()))]
    pub fn search(&self, board: &Board) -> Result<SearchResult, EngineError> {
        ensure_playable(board)?;

        let mut tree = Tree {
            maximizer: self.maximizer,
            max_depth: 9 - board.occupied_count(),
            pruning: self.pruning,
            stats: SearchStats::default(),
        };

        match tree.visit(*board, 0, true, i32::MIN, i32::MAX) {
            Node::Interior { score, best } => {
                debug!(
                    score,
                    position = %best,
                    nodes = tree.stats.nodes,
                    cutoffs = tree.stats.cutoffs,
                    "Search complete"
                );
                Ok(SearchResult {
                    score,
                    position: best,
                    stats: tree.stats,
                })
            }
            // ensure_playable leaves at least one empty square on an
            // undecided board, so the root always branches.
            Node::Terminal(_) => Err(EngineError::NoLegalMoves),
        }
    }
}

/// Alpha-beta search for the computer (O).
pub fn minimax_search(board: &Board) -> Result<SearchResult, EngineError> {
    Minimax::new(COMPUTER).search(board)
}

/// Plain minimax for `maximizer`; same scores and tie-breaks as the
/// pruned search, visiting every node.
pub fn exhaustive_search(board: &Board, maximizer: Player) -> Result<SearchResult, EngineError> {
    Minimax::exhaustive(maximizer).search(board)
}

/// Value of a searched node.
#[derive(Debug, Clone, Copy)]
enum Node {
    /// Decided board or depth cap; nothing to play.
    Terminal(i32),
    /// Best child value and the move leading to it.
    Interior { score: i32, best: Position },
}

impl Node {
    fn score(self) -> i32 {
        match self {
            Node::Terminal(score) | Node::Interior { score, .. } => score,
        }
    }
}

struct Tree {
    maximizer: Player,
    max_depth: usize,
    pruning: bool,
    stats: SearchStats,
}

impl Tree {
    fn visit(
        &mut self,
        board: Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Node {
        self.stats.nodes += 1;
        let depth_score = depth as i32;

        match evaluate(&board) {
            Outcome::Win(winner) if winner == self.maximizer => {
                return Node::Terminal(WIN_BASE - depth_score);
            }
            Outcome::Win(_) => return Node::Terminal(LOSS_BASE + depth_score),
            Outcome::Draw => return Node::Terminal(0),
            Outcome::Undecided => {}
        }

        if depth == self.max_depth {
            return Node::Terminal(0);
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best = None;

        for pos in Position::ALL.into_iter().filter(|p| board.is_empty(*p)) {
            let Ok(child) = board.place(pos, mover) else {
                continue;
            };
            let score = self
                .visit(child, depth + 1, !maximizing, alpha, beta)
                .score();

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best = Some(pos);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some(best) => Node::Interior {
                score: best_score,
                best,
            },
            None => Node::Terminal(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let result = minimax_search(&board("OO_/XX_/___")).unwrap();
        assert_eq!(result.position, Position::TopRight);
        assert_eq!(result.score, WIN_BASE - 1);
    }

    #[test]
    fn test_blocks_threat() {
        let result = minimax_search(&board("XX_/O__/__O")).unwrap();
        assert_eq!(result.position, Position::TopRight);
    }

    #[test]
    fn test_first_of_equal_wins_is_chosen() {
        // Both TopRight (row) and BottomLeft (column) win at once.
        let result = minimax_search(&board("OO_/OXX/_XX")).unwrap();
        assert_eq!(result.position, Position::TopRight);
    }

    #[test]
    fn test_forced_loss_scores_depth_minus_ten() {
        // X threatens TopRight and BottomLeft; O blocks one and loses on the other.
        let result = minimax_search(&board("XX_/XO_/__O")).unwrap();
        assert_eq!(result.score, LOSS_BASE + 2);
        assert_eq!(result.position, Position::TopRight);
    }

    #[test]
    fn test_empty_board_is_a_draw_for_either_side() {
        assert_eq!(*Minimax::new(Player::X).search(&Board::new()).unwrap().score(), 0);
        assert_eq!(*Minimax::new(Player::O).search(&Board::new()).unwrap().score(), 0);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        assert_eq!(
            minimax_search(&board("XOX/XOO/OXX")),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_decided_board_is_rejected() {
        assert_eq!(
            minimax_search(&board("XXX/OO_/___")),
            Err(EngineError::GameOver(Outcome::Win(Player::X)))
        );
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let pruned = minimax_search(&Board::new()).unwrap();
        let full = exhaustive_search(&Board::new(), COMPUTER).unwrap();

        assert_eq!(pruned.score, full.score);
        assert_eq!(pruned.position, full.position);
        assert!(pruned.stats.nodes < full.stats.nodes);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(full.stats.cutoffs, 0);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let before = board("X________");
        let _ = minimax_search(&before).unwrap();
        assert_eq!(before, board("X________"));
    }
}
