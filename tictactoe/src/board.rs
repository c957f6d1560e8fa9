use std::str::FromStr;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{IllegalMove, ParseBoardError};

pub const BOARD_SIZE: i8 = 3;

/// The eight lines of the board, in the order they are checked by [`Board::winner()`]:
/// the three rows, the three columns, the main diagonal and the anti-diagonal.
pub const LINES: [[(i8, i8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// One of the two sides. `First` is the human's mark, and moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Plays `X`.
    First,
    /// Plays `O`.
    Second,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

/// A single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }
}

/// The state of a round, derived from the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// A 3x3 grid, stored row-major.
///
/// Coordinates are 0-based. They are signed so that any input coming from
/// a user can be checked with [`Self::is_legal_move()`] without converting
/// it first.
//
// Moves only ever go into empty cells, so at most one player can hold a line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board with all cells empty.
    pub fn new() -> Self {
        Self::default()
    }

    fn index(row: i8, col: i8) -> Option<(usize, usize)> {
        let in_bounds = (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col);
        // The casts are fine, both are non-negative here
        in_bounds.then_some((row as usize, col as usize))
    }

    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    /// Whether a mark may be placed at these coordinates.
    ///
    /// Out-of-bounds coordinates are simply not legal, this never fails.
    pub fn is_legal_move(&self, row: i8, col: i8) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Puts the player's mark on an empty cell.
    ///
    /// Callers are expected to check [`Self::is_legal_move()`] first.
    pub fn place(&mut self, row: i8, col: i8, player: Player) -> Result<(), IllegalMove> {
        let (r, c) = Self::index(row, col).ok_or(IllegalMove::InvalidCoordinate { row, col })?;
        match self.cells[r][c] {
            Cell::Empty => {
                self.cells[r][c] = Cell::Mark(player);
                Ok(())
            }
            Cell::Mark(occupant) => Err(IllegalMove::InvalidMove { row, col, occupant }),
        }
    }

    /// The holder of each complete line, in [`LINES`] order.
    fn line_holders(&self) -> impl Iterator<Item = Player> + '_ {
        LINES.iter().filter_map(move |&line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row as usize][col as usize]);
            match a {
                Cell::Mark(player) if a == b && b == c => Some(player),
                _ => None,
            }
        })
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.line_holders().next()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Win(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (r as i8, c as i8, cell))
        })
    }

    /// The empty cells, in row-major order.
    pub fn legal_moves(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.iter()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(row, col, _)| (row, col))
    }

    pub fn num_marks(&self, player: Player) -> usize {
        self.iter()
            .filter(|&(_, _, cell)| cell == Cell::Mark(player))
            .count()
    }

    /// Picks one of the empty cells uniformly at random.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(i8, i8)> {
        self.legal_moves().choose(rng)
    }
}

/// Writes the board in the notation accepted by [`FromStr`], e.g. `X.O/.X./..O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let ch = cell.mark().map(Player::symbol).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Parses three rows of `X`, `O` and `.`, separated by `/` or newlines.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .trim()
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ParseBoardError::WrongNumberOfRows);
        }

        let mut board = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.chars().count() != BOARD_SIZE as usize {
                return Err(ParseBoardError::WrongRowLength { row: r });
            }
            for (c, ch) in row.chars().enumerate() {
                board.cells[r][c] = match ch {
                    'X' | 'x' => Cell::Mark(Player::First),
                    'O' | 'o' => Cell::Mark(Player::Second),
                    '.' => Cell::Empty,
                    _ => return Err(ParseBoardError::InvalidCell { row: r, ch }),
                };
            }
        }

        let mut holders = board.line_holders();
        if let Some(first_holder) = holders.next() {
            if holders.any(|other| other != first_holder) {
                return Err(ParseBoardError::TwoWinners);
            }
        }
        Ok(board)
    }
}

#[macro_export]
macro_rules! board {
    ($s:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($s)
            .expect("Invalid board given to board! macro")
    };
}
