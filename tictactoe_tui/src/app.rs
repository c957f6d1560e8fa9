use tictactoe::{Board, GameOutcome, OpponentPolicy, Player};

/// Wins, losses and draws over all rounds of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: usize,
    pub computer: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::First) => self.player += 1,
            GameOutcome::Win(Player::Second) => self.computer += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before each round, until the human presses Enter.
    Ready,
    /// Waiting for the human to enter a row, then a column.
    Playing { row: Option<i8> },
    RoundOver(GameOutcome),
    Quit,
}

/// The human plays `X` and always moves first, the computer answers with `O`.
pub struct App {
    pub board: Board,
    pub scoreboard: Scoreboard,
    pub phase: Phase,
    /// Shown below the board, e.g. after an invalid entry.
    pub message: &'static str,
    policy: OpponentPolicy,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            scoreboard: Scoreboard::default(),
            phase: Phase::Ready,
            message: "",
            policy: OpponentPolicy::new(),
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.phase {
            Phase::Ready => "Press ENTER to start...",
            Phase::Playing { row: None } => "Your turn (X). Enter row (1-3): ",
            Phase::Playing { row: Some(_) } => "Your turn (X). Enter column (1-3): ",
            Phase::RoundOver(_) => "Play again? (y/n): ",
            Phase::Quit => "",
        }
    }

    pub fn handle_key(&mut self, key: char) {
        match self.phase {
            Phase::Ready => {
                if key == 'q' {
                    self.phase = Phase::Quit;
                }
            }
            Phase::Playing { row } => {
                if key == 'q' {
                    self.phase = Phase::Quit;
                    return;
                }
                let Some(digit) = key.to_digit(10) else {
                    self.message = "Invalid input! Please enter a number.";
                    self.phase = Phase::Playing { row: None };
                    return;
                };
                // Human-facing coordinates start at 1
                let coordinate = digit as i8 - 1;
                match row {
                    None => {
                        self.message = "";
                        self.phase = Phase::Playing {
                            row: Some(coordinate),
                        };
                    }
                    Some(row) => {
                        self.phase = Phase::Playing { row: None };
                        self.human_move(row, coordinate);
                    }
                }
            }
            Phase::RoundOver(_) => match key {
                'y' | 'Y' => self.new_round(),
                _ => self.phase = Phase::Quit,
            },
            Phase::Quit => {}
        }
    }

    /// Starts the round once the human is ready.
    pub fn confirm(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Playing { row: None };
        }
    }

    /// Forgets a half-entered move.
    pub fn cancel(&mut self) {
        if let Phase::Playing { .. } = self.phase {
            self.phase = Phase::Playing { row: None };
        }
    }

    fn human_move(&mut self, row: i8, col: i8) {
        if !self.board.is_legal_move(row, col) {
            self.message = "Invalid move! Try again.";
            return;
        }
        self.message = "";
        if self.board.place(row, col, Player::First).is_err() || self.check_round_over() {
            return;
        }
        self.policy.play(&mut self.board);
        self.check_round_over();
    }

    fn check_round_over(&mut self) -> bool {
        let outcome = self.board.outcome();
        if outcome.is_over() {
            self.scoreboard.record(outcome);
            self.phase = Phase::RoundOver(outcome);
        }
        outcome.is_over()
    }

    fn new_round(&mut self) {
        self.board = Board::new();
        self.message = "";
        self.phase = Phase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use tictactoe::Cell;

    use super::*;

    fn enter(app: &mut App, keys: &str) {
        for key in keys.chars() {
            match key {
                '\n' => app.confirm(),
                _ => app.handle_key(key),
            }
        }
    }

    #[test]
    fn coordinates_are_one_based() {
        let mut app = App::new();
        enter(&mut app, "\n11");
        assert_eq!(app.board.get(0, 0), Some(Cell::Mark(Player::First)));
        // The computer answers in the center
        assert_eq!(app.board.get(1, 1), Some(Cell::Mark(Player::Second)));
        assert_eq!(app.phase, Phase::Playing { row: None });
    }

    #[test]
    fn invalid_entries_reprompt() {
        let mut app = App::new();
        enter(&mut app, "\n14");
        assert_eq!(app.message, "Invalid move! Try again.");
        assert_eq!(app.board, Board::new());

        enter(&mut app, "2x");
        assert_eq!(app.message, "Invalid input! Please enter a number.");
        assert_eq!(app.phase, Phase::Playing { row: None });

        enter(&mut app, "22");
        assert_eq!(app.message, "");
        enter(&mut app, "22");
        assert_eq!(app.message, "Invalid move! Try again.");
        assert_eq!(app.board.num_marks(Player::First), 1);
    }

    #[test]
    fn computer_win_ends_round() {
        let mut app = App::new();
        // X: (0,0); O: center. X: (0,1); O blocks at (0,2).
        // X: (2,2); O wins on the anti-diagonal at (2,0).
        enter(&mut app, "\n111233");
        assert_eq!(app.board, tictactoe::board!("XXO/.O./O.X"));
        assert_eq!(app.phase, Phase::RoundOver(GameOutcome::Win(Player::Second)));
        assert_eq!(app.scoreboard.computer, 1);

        enter(&mut app, "y");
        assert_eq!(app.board, Board::new());
        assert_eq!(app.scoreboard.computer, 1);
        assert_eq!(app.phase, Phase::Ready);
    }

    #[test]
    fn round_starts_on_enter() {
        let mut app = App::new();
        assert_eq!(app.prompt(), "Press ENTER to start...");
        enter(&mut app, "11");
        assert_eq!(app.board, Board::new());
        assert_eq!(app.phase, Phase::Ready);
        enter(&mut app, "\n\n");
        assert_eq!(app.phase, Phase::Playing { row: None });
    }

    #[test]
    fn anything_but_yes_quits_after_a_round() {
        for answer in ["n", "1", " "] {
            let mut app = App::new();
            enter(&mut app, "\n111233");
            assert!(matches!(app.phase, Phase::RoundOver(_)));
            enter(&mut app, answer);
            assert_eq!(app.phase, Phase::Quit, "answer {:?}", answer);
        }
        let mut app = App::new();
        enter(&mut app, "\n111233Y");
        assert_eq!(app.phase, Phase::Ready);
    }

    #[test]
    fn scoreboard_counts_outcomes() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.record(GameOutcome::Win(Player::First));
        scoreboard.record(GameOutcome::Draw);
        scoreboard.record(GameOutcome::Draw);
        scoreboard.record(GameOutcome::InProgress);
        assert_eq!(
            scoreboard,
            Scoreboard {
                player: 1,
                computer: 0,
                draws: 2
            }
        );
    }
}
