//! Depth-limited game tree search
//!
//! Three strategies share one contract: given the player to move, a board and
//! a depth limit, pick a column. Leaves (depth exhausted, game over or no
//! legal move) are scored with [`evaluate`] from the searching player's point
//! of view, whichever side the leaf favours.
//!
//! Ties between children are broken towards the lowest column: a child only
//! replaces the running best on a strictly better score.

use anyhow::{anyhow, Error, Result};
use tracing::{debug, trace};

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player};
use crate::eval::{evaluate, Score};
use crate::moves::child_boards;

/// The strategy used to search the game tree
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Algorithm {
    /// Plain minimax, the opponent is assumed to play the worst move for us
    Minimax,
    /// Minimax with alpha-beta pruning, picks the same moves as `Minimax`
    AlphaBeta,
    /// The opponent is assumed to play uniformly at random
    Expectimax,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectimax];

    /// Searches `board` for `player` to `depth` plies
    pub fn search<B: Board>(self, player: Player, board: &B, depth: usize) -> SearchResult {
        Searcher::new(self, player).search(board, depth)
    }

    /// Returns the column to play, or `None` if there is no move to make
    pub fn choose_column<B: Board>(self, player: Player, board: &B, depth: usize) -> Option<usize> {
        self.search(player, board, depth).column
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Algorithm::AlphaBeta),
            "expectimax" | "em" => Ok(Algorithm::Expectimax),
            other => Err(anyhow!(
                "unknown algorithm '{}', expected one of minimax, alphabeta, expectimax",
                other
            )),
        }
    }
}

/// The outcome of a search: the column to play and its backed-up score
///
/// `column` is `None` when no move was chosen, because the board is already
/// over, the depth limit is zero or no column is playable.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self { column: None, score }
    }
}

/// Searches `board` for `player` with plain minimax
pub fn minimax<B: Board>(player: Player, board: &B, depth: usize) -> SearchResult {
    Algorithm::Minimax.search(player, board, depth)
}

/// Searches `board` for `player` with alpha-beta pruned minimax
pub fn alphabeta<B: Board>(player: Player, board: &B, depth: usize) -> SearchResult {
    Algorithm::AlphaBeta.search(player, board, depth)
}

/// Searches `board` for `player` with expectimax
pub fn expectimax<B: Board>(player: Player, board: &B, depth: usize) -> SearchResult {
    Algorithm::Expectimax.search(player, board, depth)
}

/// A search agent for one player
///
/// The agent keeps the player it maximises for and counts the nodes it
/// visits across searches.
#[derive(Clone, Debug)]
pub struct Searcher {
    algorithm: Algorithm,
    player: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` choosing moves for `player`
    pub fn new(algorithm: Algorithm, player: Player) -> Self {
        Self {
            algorithm,
            player,
            node_count: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Searches `board`, with this searcher's player to move, `depth` plies deep
    pub fn search<B: Board>(&mut self, board: &B, depth: usize) -> SearchResult {
        let start_count = self.node_count;

        let result = match self.algorithm {
            Algorithm::Minimax => self.minimax(self.player, board, depth),
            Algorithm::AlphaBeta => {
                self.alphabeta(self.player, board, depth, Score::NEG_INFINITY, Score::INFINITY)
            }
            Algorithm::Expectimax => self.expectimax(self.player, board, depth),
        };

        debug!(
            algorithm = %self.algorithm,
            player = self.player.number(),
            depth,
            column = ?result.column,
            score = result.score,
            nodes = self.node_count - start_count,
            "search finished"
        );
        result
    }

    // leaves are always scored for the searching player
    fn evaluate<B: Board>(&self, board: &B) -> SearchResult {
        SearchResult::leaf(evaluate(self.player, board))
    }

    // expands a node, or returns its static score if it is a leaf
    fn expand<B: Board>(
        &mut self,
        turn: Player,
        board: &B,
        depth: usize,
    ) -> std::result::Result<Vec<(usize, B)>, SearchResult> {
        self.node_count += 1;

        if depth == 0 || board.terminal() {
            return Err(self.evaluate(board));
        }
        let children = child_boards(turn, board);
        if children.is_empty() {
            trace!(depth, "no playable column, scoring as a leaf");
            return Err(self.evaluate(board));
        }
        Ok(children)
    }

    fn minimax<B: Board>(&mut self, turn: Player, board: &B, depth: usize) -> SearchResult {
        let children = match self.expand(turn, board, depth) {
            Ok(children) => children,
            Err(leaf) => return leaf,
        };

        let maximising = turn == self.player;
        let mut best = SearchResult::leaf(if maximising {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        });

        for (column, child) in children {
            let score = self.minimax(turn.other(), &child, depth - 1).score;
            if (maximising && score > best.score) || (!maximising && score < best.score) {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        best
    }

    fn alphabeta<B: Board>(
        &mut self,
        turn: Player,
        board: &B,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        let children = match self.expand(turn, board, depth) {
            Ok(children) => children,
            Err(leaf) => return leaf,
        };

        let mut best;
        if turn == self.player {
            best = SearchResult::leaf(Score::NEG_INFINITY);
            for (column, child) in children {
                let score = self.alphabeta(turn.other(), &child, depth - 1, alpha, beta).score;
                if score > best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                alpha = alpha.max(score);
                // the minimiser already has a better option elsewhere
                if alpha >= beta {
                    break;
                }
            }
        } else {
            best = SearchResult::leaf(Score::INFINITY);
            for (column, child) in children {
                let score = self.alphabeta(turn.other(), &child, depth - 1, alpha, beta).score;
                if score < best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                beta = beta.min(score);
                // the maximiser already has a better option elsewhere
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    }

    fn expectimax<B: Board>(&mut self, turn: Player, board: &B, depth: usize) -> SearchResult {
        let children = match self.expand(turn, board, depth) {
            Ok(children) => children,
            Err(leaf) => return leaf,
        };

        if turn == self.player {
            let mut best = SearchResult::leaf(Score::NEG_INFINITY);
            for (column, child) in children {
                let score = self.expectimax(turn.other(), &child, depth - 1).score;
                if score > best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
            }
            best
        } else {
            // every opponent reply is equally likely, chance nodes choose no column
            let count = children.len() as Score;
            let total: Score = children
                .into_iter()
                .map(|(_, child)| self.expectimax(turn.other(), &child, depth - 1).score)
                .sum();
            SearchResult::leaf(total / count)
        }
    }
}
