use serde::{Deserialize, Serialize};

use crate::{Board, Player};

/// Request for a bot to do something.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new round.
    ///
    /// The response should be an [`Okay`].
    NewGame {
        /// The mark the bot places this round. [`Player::First`] moves first.
        mark: Player,
    },
    /// Request to place a mark.
    ///
    /// The response should be a [`PlayTurnResponse`] naming an empty cell.
    PlayTurn {
        /// The board, as rows of cells from top to bottom.
        board: Board,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// The cell to place a mark on, with 0-based coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTurnResponse {
    pub row: i8,
    pub col: i8,
}
