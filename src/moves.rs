//! Successor generation for the game tree

use crate::board::{Board, Player};

/// Returns every board reachable by `player` dropping one disc, paired with
/// the column it was dropped in
///
/// Columns are visited left to right, so the result is ordered by ascending
/// column. An empty result means the board is full.
pub fn child_boards<B: Board>(player: Player, board: &B) -> Vec<(usize, B)> {
    (0..board.cols())
        .filter(|&column| board.placeable(column))
        .map(|column| {
            let mut child = board.clone();
            child.place(player, column);
            (column, child)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arrayboard::ArrayBoard, board::Cell, WIDTH};
    use anyhow::Result;

    #[test]
    fn one_child_per_open_column() {
        let board = ArrayBoard::new();
        let children = child_boards(Player::One, &board);

        assert_eq!(children.len(), WIDTH);
        for (i, (column, child)) in children.iter().enumerate() {
            assert_eq!(*column, i);
            assert_eq!(child.slot(0, *column), Cell::PlayerOne);
        }
        // the parent is untouched
        assert!((0..WIDTH).all(|column| board.slot(0, column).is_empty()));
    }

    #[test]
    fn skips_full_columns() -> Result<()> {
        let board = ArrayBoard::from_str("444444")?;
        let columns: Vec<usize> = child_boards(Player::One, &board)
            .into_iter()
            .map(|(column, _)| column)
            .collect();

        assert_eq!(columns, vec![0, 1, 2, 4, 5, 6]);
        Ok(())
    }

    #[test]
    fn full_board_has_no_children() -> Result<()> {
        let board = ArrayBoard::from_str("121212343434565656212121434343656565777777")?;
        assert!(child_boards(Player::One, &board).is_empty());
        Ok(())
    }
}
