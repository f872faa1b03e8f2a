use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, LINE, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameState::PlayerOneWin,
            Player::Two => GameState::PlayerTwoWin,
        }
    }
}

/// A `WIDTH` x `HEIGHT` board backed by a flat array of cells
#[derive(Clone, Debug)]
pub struct ArrayBoard {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
    game: String,
    num_moves: usize,
    pub state: GameState,
}

impl ArrayBoard {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            game: String::new(),
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    /// Builds a board from a string of 1-indexed column digits, players
    /// alternating from player one
    pub fn from_str<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = board.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Plays a validated move for the player to move
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.place(self.next_player(), column);

        Ok(self.state)
    }

    /// The player whose turn it is, assuming players have alternated
    pub fn next_player(&self) -> Player {
        if self.num_moves % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The moves played so far as 1-indexed column digits
    pub fn moves(&self) -> &str {
        &self.game
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let (pos_x, pos_y) = cell_position((origin_x, origin_y), idx);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }

    fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    // would dropping a disc of `player` in `column` complete a line?
    fn check_winning_move(&self, player: Player, column: usize) -> bool {
        let cell = player.cell();
        let height = self.heights[column];

        // check vertical alignment
        if height >= LINE - 1
            && (1..LINE).all(|below| self.cells[column + WIDTH * (height - below)] == cell)
        {
            return true;
        }

        // check horizontal and diagonal alignment
        for dy_dx in -1i32..=1 {
            let mut run = 0;
            for dx in [-1i32, 1].iter() {
                let mut x = column as i32 + dx;
                let mut y = height as i32 + dx * dy_dx;
                loop {
                    if x < 0
                        || x >= WIDTH as i32
                        || y < 0
                        || y >= HEIGHT as i32
                        || self.cells[x as usize + WIDTH * y as usize] != cell
                    {
                        break;
                    }
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run >= LINE - 1 {
                return true;
            }
        }

        false
    }
}

impl Board for ArrayBoard {
    fn rows(&self) -> usize {
        HEIGHT
    }

    fn cols(&self) -> usize {
        WIDTH
    }

    fn slot(&self, row: usize, col: usize) -> Cell {
        self.cells[col + WIDTH * row]
    }

    fn placeable(&self, col: usize) -> bool {
        self.playable(col)
    }

    fn place(&mut self, player: Player, col: usize) {
        if self.state == GameState::Playing {
            self.state = if self.check_winning_move(player, col) {
                GameState::win_for(player)
            } else if self.num_moves + 1 == WIDTH * HEIGHT {
                GameState::Draw
            } else {
                GameState::Playing
            };
        }
        self.cells[col + WIDTH * self.heights[col]] = player.cell();
        self.heights[col] += 1;
        self.num_moves += 1;
        self.game.push_str(&(col + 1).to_string());
    }

    fn terminal(&self) -> bool {
        self.state != GameState::Playing
    }

    fn who_wins(&self) -> Option<Player> {
        match self.state {
            GameState::PlayerOneWin => Some(Player::One),
            GameState::PlayerTwoWin => Some(Player::Two),
            GameState::Playing | GameState::Draw => None,
        }
    }
}

// screen position of cell `idx`, rows grow upwards from the origin and are
// clipped to the top of a terminal shorter than the board
fn cell_position((origin_x, origin_y): (u16, u16), idx: usize) -> (u16, u16) {
    (
        origin_x.saturating_add((idx % WIDTH) as u16),
        origin_y.saturating_sub((idx / WIDTH) as u16),
    )
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::new()
    }
}
