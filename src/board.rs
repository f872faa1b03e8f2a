//! The board interface consumed by the search agent

/// The content of a single slot on the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the opponent of this player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the cell occupied by this player's discs
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// The 1-based number of this player, for display
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A gravity-ordered game board
///
/// Rows are numbered from the bottom of the board upwards and columns from
/// the left, both starting at 0. Implementors guarantee that no empty slot
/// lies below an occupied slot in the same column.
///
/// Cloning must produce an independent copy, the search agent clones the
/// board for every hypothetical move it explores.
pub trait Board: Clone {
    /// The number of rows in the grid
    fn rows(&self) -> usize;

    /// The number of columns in the grid
    fn cols(&self) -> usize;

    /// The content of the slot at (`row`, `col`)
    fn slot(&self, row: usize, col: usize) -> Cell;

    /// The slots of row `row`, left to right
    fn row(&self, row: usize) -> Vec<Cell> {
        (0..self.cols()).map(|col| self.slot(row, col)).collect()
    }

    /// The slots of column `col`, bottom to top
    fn col(&self, col: usize) -> Vec<Cell> {
        (0..self.rows()).map(|row| self.slot(row, col)).collect()
    }

    /// Whether another disc fits in column `col`
    fn placeable(&self, col: usize) -> bool;

    /// Drops a disc of `player` into column `col`
    ///
    /// The result is unspecified if `placeable(col)` is false.
    fn place(&mut self, player: Player, col: usize);

    /// Whether the game has ended, by a win or a full board
    fn terminal(&self) -> bool;

    /// The winner of the game, `None` while playing or for a draw
    fn who_wins(&self) -> Option<Player>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn player_cells() {
        assert_eq!(Player::One.cell(), Cell::PlayerOne);
        assert_eq!(Player::Two.cell(), Cell::PlayerTwo);
        assert!(!Player::One.cell().is_empty());
        assert!(Cell::Empty.is_empty());
    }
}
