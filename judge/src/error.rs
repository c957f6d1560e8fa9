use tictactoe::{IllegalMove, Player as Mark};

#[derive(Debug)]
/// Error type for one turn.
pub struct IllegalTurn {
    /// Counts the moves of both players, starting at 0.
    pub move_idx: usize,
    pub mark: Mark,
    pub err: IllegalMove,
}

impl std::error::Error for IllegalTurn {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for IllegalTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move number {} of the round, by {}, was illegal",
            self.move_idx + 1,
            self.mark.symbol()
        )
    }
}
