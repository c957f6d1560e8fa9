use crate::Player;

/// The error type for [`Board::place()`](crate::Board::place), i.e. for placing a single mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    InvalidCoordinate { row: i8, col: i8 },
    InvalidMove { row: i8, col: i8, occupant: Player },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidCoordinate { row, col } => write!(
                f,
                "Mark was placed outside of the board, at ({}, {})",
                row, col
            ),
            IllegalMove::InvalidMove { row, col, occupant } => write!(
                f,
                "Mark was placed at ({}, {}), which is already taken by {}",
                row,
                col,
                occupant.symbol()
            ),
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    WrongNumberOfRows,
    WrongRowLength { row: usize },
    InvalidCell { row: usize, ch: char },
    TwoWinners,
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::WrongNumberOfRows => write!(f, "A board needs exactly three rows"),
            ParseBoardError::WrongRowLength { row } => {
                write!(f, "Row {} does not have exactly three cells", row + 1)
            }
            ParseBoardError::InvalidCell { row, ch } => write!(
                f,
                "Row {} contains '{}', expected one of 'X', 'O' or '.'",
                row + 1,
                ch
            ),
            ParseBoardError::TwoWinners => {
                write!(f, "Both players have a line, which cannot happen in a game")
            }
        }
    }
}
