//! A depth-limited search agent for playing the board game 'Connect 4'
//!
//! The agent explores the game tree to a fixed depth and scores the positions
//! it reaches with a static threat-counting heuristic. Three interchangeable
//! search strategies are provided: plain minimax, minimax with alpha-beta
//! pruning and expectimax.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_search::{arrayboard::ArrayBoard, board::Player, search::Algorithm};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three discs along the bottom row
//! let board = ArrayBoard::from_str("112233")?;
//! let result = Algorithm::AlphaBeta.search(Player::One, &board, 3);
//!
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod arrayboard;

pub mod moves;

pub mod eval;

pub mod search;

pub mod config;

pub mod arena;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of discs in a winning line
pub const LINE: usize = 4;

// a line of four must fit on the board in both directions
const_assert!(WIDTH >= LINE);
const_assert!(HEIGHT >= LINE);
