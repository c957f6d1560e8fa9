use serde::{Deserialize, Serialize};

use crate::{Board, Player};

pub const CENTER: (i8, i8) = (1, 1);
/// Corners in the order they are tried.
pub const CORNERS: [(i8, i8); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];
/// Edge midpoints in the order they are tried.
pub const EDGES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];

/// The rule that picked a move. Rules are tried in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Completes one of our own lines.
    Win,
    /// Occupies the cell that would complete one of the opponent's lines.
    Block,
    Center,
    Corner,
    Edge,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub row: i8,
    pub col: i8,
    pub tier: Tier,
}

/// The rule-based computer opponent.
///
/// This is a fixed cascade of heuristics, not a search. It can be beaten by
/// setting up a fork, and the order in which cells are scanned decides which
/// move is picked when several are equally good.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpponentPolicy {
    mark: Player,
}

impl Default for OpponentPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy {
    /// The opponent of the human, i.e. a policy placing [`Player::Second`] marks.
    pub fn new() -> Self {
        Self::playing(Player::Second)
    }

    /// The same rules, applied on behalf of `mark`.
    pub fn playing(mark: Player) -> Self {
        Self { mark }
    }

    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Runs the cascade and reports which rule fired.
    ///
    /// Returns `None` only if the board is full.
    pub fn decide(&self, board: &Board) -> Option<Decision> {
        let (row, col, tier) = completing_move(board, self.mark)
            .map(|(row, col)| (row, col, Tier::Win))
            .or_else(|| {
                completing_move(board, self.mark.opponent())
                    .map(|(row, col)| (row, col, Tier::Block))
            })
            .or_else(|| first_empty(board, &[CENTER]).map(|(row, col)| (row, col, Tier::Center)))
            .or_else(|| first_empty(board, &CORNERS).map(|(row, col)| (row, col, Tier::Corner)))
            .or_else(|| first_empty(board, &EDGES).map(|(row, col)| (row, col, Tier::Edge)))?;
        Some(Decision { row, col, tier })
    }

    /// The cell to occupy next, as `(row, col)`. Returns `None` only if the board is full.
    pub fn choose_move(&self, board: &Board) -> Option<(i8, i8)> {
        self.decide(board).map(|Decision { row, col, .. }| (row, col))
    }

    /// Decides and places the mark on the board.
    pub fn play(&self, board: &mut Board) -> Option<Decision> {
        let decision = self.decide(board)?;
        board
            .place(decision.row, decision.col, self.mark)
            .expect("Policy picked a cell that is not empty");
        Some(decision)
    }
}

/// The first empty cell, in row-major order, at which `player` would complete a line.
fn completing_move(board: &Board, player: Player) -> Option<(i8, i8)> {
    board.legal_moves().find(|&(row, col)| {
        // Probe on a copy, the caller's board is never touched
        let mut probe = *board;
        probe.place(row, col, player).is_ok() && probe.winner() == Some(player)
    })
}

fn first_empty(board: &Board, candidates: &[(i8, i8)]) -> Option<(i8, i8)> {
    candidates
        .iter()
        .copied()
        .find(|&(row, col)| board.is_legal_move(row, col))
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachableBoard;
    use crate::{board, Cell, GameOutcome, LINES};

    quickcheck! {
        fn play_changes_exactly_one_cell(input: ReachableBoard) -> bool {
            let before = input.board;
            let mut after = before;
            match OpponentPolicy::new().play(&mut after) {
                None => before.is_full() && after == before,
                Some(Decision { row, col, .. }) => before.iter().zip(after.iter()).all(
                    |((r, c, old), (_, _, new))| {
                        if (r, c) == (row, col) {
                            old == Cell::Empty && new == Cell::Mark(Player::Second)
                        } else {
                            old == new
                        }
                    },
                ),
            }
        }

        fn chosen_move_is_legal(input: ReachableBoard) -> bool {
            let policy = OpponentPolicy::playing(input.to_move);
            match policy.choose_move(&input.board) {
                Some((row, col)) => input.board.is_legal_move(row, col),
                None => input.board.is_full(),
            }
        }
    }

    #[test]
    fn empty_board_takes_center() {
        let decision = OpponentPolicy::new().decide(&Board::new()).unwrap();
        assert_eq!((decision.row, decision.col), CENTER);
        assert_eq!(decision.tier, Tier::Center);
    }

    #[test]
    fn completes_every_line_shape() {
        let policy = OpponentPolicy::new();
        for line in LINES {
            for missing in 0..3 {
                let mut board = Board::new();
                for (idx, &(row, col)) in line.iter().enumerate() {
                    if idx != missing {
                        board.place(row, col, Player::Second).unwrap();
                    }
                }
                let decision = policy.decide(&board).unwrap();
                assert_eq!((decision.row, decision.col), line[missing], "board {}", board);
                assert_eq!(decision.tier, Tier::Win);
            }
        }
    }

    #[test]
    fn blocks_every_line_shape() {
        let policy = OpponentPolicy::new();
        for line in LINES {
            for missing in 0..3 {
                let mut board = Board::new();
                for (idx, &(row, col)) in line.iter().enumerate() {
                    if idx != missing {
                        board.place(row, col, Player::First).unwrap();
                    }
                }
                let decision = policy.decide(&board).unwrap();
                assert_eq!((decision.row, decision.col), line[missing], "board {}", board);
                assert_eq!(decision.tier, Tier::Block);
            }
        }
    }

    #[test]
    fn winning_beats_blocking() {
        let decision = OpponentPolicy::new().decide(&board!("XX./OO./X..")).unwrap();
        assert_eq!((decision.row, decision.col), (1, 2));
        assert_eq!(decision.tier, Tier::Win);
    }

    #[test]
    fn first_win_in_row_major_order() {
        // (0, 2) completes the top row and (2, 0) the left column
        let policy = OpponentPolicy::new();
        assert_eq!(policy.choose_move(&board!("OO./OX./.XX")), Some((0, 2)));
    }

    #[test]
    fn first_block_in_row_major_order() {
        let policy = OpponentPolicy::new();
        assert_eq!(policy.choose_move(&board!("XX./X../...")), Some((0, 2)));
    }

    #[test]
    fn corner_when_center_taken() {
        let policy = OpponentPolicy::new();
        let decision = policy.decide(&board!(".../.X./...")).unwrap();
        assert_eq!((decision.row, decision.col), (0, 0));
        assert_eq!(decision.tier, Tier::Corner);

        assert_eq!(policy.choose_move(&board!("O../.X./...")), Some((0, 2)));
    }

    #[test]
    fn edge_when_center_and_corners_taken() {
        let decision = OpponentPolicy::new().decide(&board!("OXO/.X./XOX")).unwrap();
        assert_eq!((decision.row, decision.col), (1, 0));
        assert_eq!(decision.tier, Tier::Edge);
    }

    #[test]
    fn full_board_has_no_move() {
        let board = board!("XOX/XOO/OXX");
        assert_eq!(OpponentPolicy::new().choose_move(&board), None);
        let mut after = board;
        assert_eq!(OpponentPolicy::new().play(&mut after), None);
        assert_eq!(after, board);
    }

    #[test]
    fn can_play_either_mark() {
        let policy = OpponentPolicy::playing(Player::First);
        let decision = policy.decide(&board!("XX./OO./...")).unwrap();
        assert_eq!((decision.row, decision.col), (0, 2));
        assert_eq!(decision.tier, Tier::Win);

        let mut board = board!("OO./X../X..");
        let decision = policy.play(&mut board).unwrap();
        assert_eq!(decision.tier, Tier::Block);
        assert_eq!(board.get(0, 2), Some(Cell::Mark(Player::First)));
    }

    #[test]
    fn fork_beats_the_cascade() {
        // Opposite corners against a center reply lead the policy into a
        // corner, and the forced block then leaves X with two threats.
        let policy = OpponentPolicy::new();
        let mut board = Board::new();
        board.place(0, 0, Player::First).unwrap();
        assert_eq!(policy.play(&mut board).map(|d| d.tier), Some(Tier::Center));
        board.place(2, 2, Player::First).unwrap();
        assert_eq!(policy.choose_move(&board), Some((0, 2)));
        policy.play(&mut board);
        board.place(2, 0, Player::First).unwrap();
        let decision = policy.play(&mut board).unwrap();
        assert_eq!((decision.row, decision.col, decision.tier), (1, 0, Tier::Block));
        board.place(2, 1, Player::First).unwrap();
        assert_eq!(board.outcome(), GameOutcome::Win(Player::First));
    }
}
