//! Plays complete games between two search configurations
//!
//! Search is deterministic, so a single game between two configurations
//! always plays out the same way. Games are instead started from every
//! opening of a few plies, once with each side moving first after it.

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::arrayboard::ArrayBoard;
use crate::board::{Board, Player};
use crate::config::SearchConfig;
use crate::search::Searcher;
use crate::WIDTH;

/// Returns every move string of `plies` moves that leaves the game undecided
pub fn openings(plies: usize) -> Vec<String> {
    let mut openings = vec![String::new()];
    for _ in 0..plies {
        openings = openings
            .iter()
            .flat_map(|opening| {
                (1..=WIDTH).filter_map(move |column| {
                    let moves = format!("{}{}", opening, column);
                    match ArrayBoard::from_str(&moves) {
                        Ok(board) if !board.terminal() => Some(moves),
                        _ => None,
                    }
                })
            })
            .collect();
    }
    openings
}

/// How a game between the two sides of an arena ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// The side with this index won
    Win(usize),
    Draw,
}

/// The record of one arena game
#[derive(Clone, Debug)]
pub struct MatchResult {
    pub outcome: Outcome,
    /// All moves of the game, opening included, as 1-indexed column digits
    pub moves: String,
    /// Nodes searched by each side
    pub nodes: [usize; 2],
    /// Whether the game ended by a side finding no move to play
    pub forfeit: bool,
}

/// Totals over a series of arena games
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ArenaSummary {
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
    pub forfeits: usize,
    pub nodes: [usize; 2],
}

impl ArenaSummary {
    fn record(&mut self, result: &MatchResult) {
        self.games += 1;
        match result.outcome {
            Outcome::Win(side) => self.wins[side] += 1,
            Outcome::Draw => self.draws += 1,
        }
        if result.forfeit {
            self.forfeits += 1;
        }
        self.nodes[0] += result.nodes[0];
        self.nodes[1] += result.nodes[1];
    }
}

/// Two search configurations playing each other
#[derive(Copy, Clone, Debug)]
pub struct Arena {
    sides: [SearchConfig; 2],
}

impl Arena {
    pub fn new(first: SearchConfig, second: SearchConfig) -> Self {
        Self {
            sides: [first, second],
        }
    }

    pub fn sides(&self) -> &[SearchConfig; 2] {
        &self.sides
    }

    /// Plays one game from `opening`
    ///
    /// Side 0 moves first after the opening, or side 1 if `swap` is set.
    pub fn play_game(&self, opening: &str, swap: bool) -> Result<MatchResult> {
        let mut board = ArrayBoard::from_str(opening)?;
        if board.terminal() {
            return Err(anyhow!("opening '{}' already ends the game", opening));
        }

        let first_player = board.next_player();
        let player_of = |side: usize| {
            if (side == 1) == swap {
                first_player
            } else {
                first_player.other()
            }
        };
        let mut searchers = [
            Searcher::new(self.sides[0].algorithm, player_of(0)),
            Searcher::new(self.sides[1].algorithm, player_of(1)),
        ];
        let side_of = |player: Player| if player_of(0) == player { 0 } else { 1 };

        let mut forfeit = None;
        while !board.terminal() {
            let player = board.next_player();
            let side = side_of(player);

            match searchers[side].search(&board, self.sides[side].depth).column {
                Some(column) => {
                    board.play_checked(column + 1)?;
                }
                None => {
                    forfeit = Some(side);
                    break;
                }
            }
        }

        let outcome = match (forfeit, board.who_wins()) {
            (Some(side), _) => Outcome::Win(1 - side),
            (None, Some(winner)) => Outcome::Win(side_of(winner)),
            (None, None) => Outcome::Draw,
        };
        debug!(opening, swap, moves = board.moves(), ?outcome, "game finished");

        Ok(MatchResult {
            outcome,
            moves: board.moves().to_string(),
            nodes: [searchers[0].node_count, searchers[1].node_count],
            forfeit: forfeit.is_some(),
        })
    }

    /// Plays every opening twice, once with each side moving first,
    /// showing progress on stdout
    pub fn run(&self, openings: &[String]) -> Result<ArenaSummary> {
        self._run(openings, false)
    }

    /// Plays every opening twice, once with each side moving first
    pub fn run_silent(&self, openings: &[String]) -> Result<ArenaSummary> {
        self._run(openings, true)
    }

    fn _run(&self, openings: &[String], silent: bool) -> Result<ArenaSummary> {
        let games: Vec<(&str, bool)> = openings
            .iter()
            .flat_map(|opening| vec![(opening.as_str(), false), (opening.as_str(), true)])
            .collect();

        let progress = if silent {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(games.len() as u64)
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );

        // games are independent, each owns its board and searchers
        let results = games
            .par_iter()
            .map(|&(opening, swap)| {
                let result = self.play_game(opening, swap);
                progress.inc(1);
                result
            })
            .collect::<Result<Vec<MatchResult>>>()?;
        progress.finish();

        let mut summary = ArenaSummary::default();
        for result in results.iter() {
            summary.record(result);
        }
        info!(
            first = %self.sides[0],
            second = %self.sides[1],
            games = summary.games,
            first_wins = summary.wins[0],
            second_wins = summary.wins[1],
            draws = summary.draws,
            "arena finished"
        );
        Ok(summary)
    }
}
