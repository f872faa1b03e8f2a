//! Static evaluation of a position
//!
//! Every window of `LINE` consecutive slots along a row, a column or either
//! diagonal is a potential winning line. A window that holds no opponent disc
//! still counts for the player, weighted steeply by how many of its slots the
//! player already holds, and symmetrically for the opponent. The score is the
//! player's weighted total minus the opponent's.

use crate::board::{Board, Cell, Player};
use crate::LINE;

/// A score estimating the advantage of one player over the other
pub type Score = f64;

/// The weight of a line holding 0, 1, 2, 3 or 4 of one player's discs
///
/// A completed line outweighs everything else on the board, and a line of
/// three outweighs several lines of two.
pub const WEIGHTS: [i64; LINE + 1] = [0, 1, 4, 16, 1000];

// (row, col) steps: horizontal, vertical, diagonal /, diagonal \
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Collects every `LINE`-slot window that lies entirely on the board
pub fn segments<B: Board>(board: &B) -> Vec<[Cell; LINE]> {
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);
    let reach = LINE as isize - 1;
    let mut segments = Vec::new();

    for &(d_row, d_col) in DIRECTIONS.iter() {
        for row in 0..rows {
            for col in 0..cols {
                let (end_row, end_col) = (row + d_row * reach, col + d_col * reach);
                if end_row < 0 || end_row >= rows || end_col < 0 || end_col >= cols {
                    continue;
                }

                let mut segment = [Cell::Empty; LINE];
                for (i, slot) in segment.iter_mut().enumerate() {
                    let i = i as isize;
                    *slot = board.slot((row + d_row * i) as usize, (col + d_col * i) as usize);
                }
                segments.push(segment);
            }
        }
    }
    segments
}

/// Scores `board` from the point of view of `player`
///
/// Positive scores favour `player`, negative scores favour the opponent.
pub fn evaluate<B: Board>(player: Player, board: &B) -> Score {
    let own = player.cell();
    let opponent = player.other().cell();

    // number of open lines holding 0..=LINE discs of each side
    let mut own_lines = [0i64; LINE + 1];
    let mut opponent_lines = [0i64; LINE + 1];

    for segment in segments(board) {
        let own_count = segment.iter().filter(|&&cell| cell == own).count();
        let opponent_count = segment.iter().filter(|&&cell| cell == opponent).count();

        if opponent_count == 0 {
            own_lines[own_count] += 1;
        }
        if own_count == 0 {
            opponent_lines[opponent_count] += 1;
        }
    }

    let weighted = |lines: &[i64; LINE + 1]| -> i64 {
        lines.iter().zip(WEIGHTS.iter()).map(|(n, w)| n * w).sum()
    };

    (weighted(&own_lines) - weighted(&opponent_lines)) as Score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arrayboard::ArrayBoard, HEIGHT, WIDTH};
    use anyhow::Result;

    #[test]
    fn segment_count() {
        let horizontal = HEIGHT * (WIDTH - 3);
        let vertical = WIDTH * (HEIGHT - 3);
        let diagonal = (HEIGHT - 3) * (WIDTH - 3);

        let segments = segments(&ArrayBoard::new());
        assert_eq!(segments.len(), horizontal + vertical + 2 * diagonal);
        assert!(segments.iter().flatten().all(Cell::is_empty));
    }

    #[test]
    fn empty_board_is_even() {
        let board = ArrayBoard::new();
        assert_eq!(evaluate(Player::One, &board), 0.0);
        assert_eq!(evaluate(Player::Two, &board), 0.0);
    }

    #[test]
    fn single_disc() -> Result<()> {
        // a corner disc sits on one row, one column and one diagonal line
        let board = ArrayBoard::from_str("1")?;
        assert_eq!(evaluate(Player::One, &board), 3.0);
        assert_eq!(evaluate(Player::Two, &board), -3.0);

        // the centre bottom disc sits on 4 row, 1 column and 2 diagonal lines
        let board = ArrayBoard::from_str("4")?;
        assert_eq!(evaluate(Player::One, &board), 7.0);
        Ok(())
    }

    #[test]
    fn antisymmetric() -> Result<()> {
        for moves in ["4453", "1122334", "12233434474", "3344557", "444444"].iter() {
            let board = ArrayBoard::from_str(moves)?;
            assert_eq!(
                evaluate(Player::One, &board),
                -evaluate(Player::Two, &board),
                "{}",
                moves
            );
        }
        Ok(())
    }

    #[test]
    fn completed_line_dominates() -> Result<()> {
        let won = ArrayBoard::from_str("1122334")?;
        assert_eq!(evaluate(Player::One, &won), 997.0);
        assert_eq!(evaluate(Player::Two, &won), -997.0);
        Ok(())
    }

    #[test]
    fn open_three_beats_scattered_discs() -> Result<()> {
        // the same three discs, in a row or split across the bottom
        let three = ArrayBoard::from_str("17273")?;
        let scattered = ArrayBoard::from_str("17275")?;
        assert_eq!(evaluate(Player::One, &three), 18.0);
        assert_eq!(evaluate(Player::One, &scattered), 7.0);
        Ok(())
    }
}
