use crate::game::RoundResult;

/// Tally of all rounds between two players. Index 0 is the first player of the matchup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: [usize; 2],
    /// Wins given away through illegal moves, by the player who made them.
    pub illegal_moves: [usize; 2],
    pub draws: usize,
}

impl MatchScore {
    pub fn record(&mut self, result: &RoundResult) {
        match result {
            RoundResult::WonByPlayer { player_idx } => self.wins[*player_idx] += 1,
            RoundResult::Draw => self.draws += 1,
            RoundResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.wins[1 - player_idx] += 1;
                self.illegal_moves[*player_idx] += 1;
            }
        }
    }

    pub fn num_rounds(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }

    /// Percentages of wins by player 1, wins by player 2, and draws.
    pub fn percentages(&self) -> [f32; 3] {
        let num_rounds = self.num_rounds().max(1) as f32;
        [
            self.wins[0] as f32 / num_rounds * 100.0,
            self.wins[1] as f32 / num_rounds * 100.0,
            self.draws as f32 / num_rounds * 100.0,
        ]
    }

    /// A human-readable summary, naming the two players.
    pub fn summary(&self, name_1: &str, name_2: &str) -> String {
        let paren = |loser_idx: usize, loser_num: usize| {
            if self.illegal_moves[loser_idx] > 0 {
                format!(
                    " ({} through illegal moves by player {})",
                    self.illegal_moves[loser_idx], loser_num
                )
            } else {
                String::new()
            }
        };
        format!(
            "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} draws",
            self.wins[0],
            name_1,
            paren(1, 2),
            self.wins[1],
            name_2,
            paren(0, 1),
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use tictactoe::{IllegalMove, Player};

    use super::*;
    use crate::IllegalTurn;

    #[test]
    fn illegal_move_counts_as_loss() {
        let mut score = MatchScore::default();
        score.record(&RoundResult::WonByPlayer { player_idx: 0 });
        score.record(&RoundResult::Draw);
        score.record(&RoundResult::IllegalMoveByPlayer {
            player_idx: 0,
            err: IllegalTurn {
                move_idx: 2,
                mark: Player::First,
                err: IllegalMove::InvalidCoordinate { row: 3, col: 0 },
            },
        });
        assert_eq!(
            score,
            MatchScore {
                wins: [1, 1],
                illegal_moves: [1, 0],
                draws: 1,
            }
        );
        assert_eq!(score.num_rounds(), 3);
        assert_eq!(
            score.summary("alice", "bob"),
            "End result:\n- 1 wins by alice\n- 1 wins by bob (1 through illegal moves by player 1)\n- 1 draws"
        );
    }

    #[test]
    fn percentages_of_empty_score_are_zero() {
        assert_eq!(MatchScore::default().percentages(), [0.0, 0.0, 0.0]);
        let score = MatchScore {
            wins: [1, 0],
            illegal_moves: [0, 0],
            draws: 3,
        };
        assert_eq!(score.percentages(), [25.0, 0.0, 75.0]);
    }
}
