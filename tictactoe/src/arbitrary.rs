use quickcheck::Arbitrary;

use crate::{Board, Player};

/// A board reached by alternating legal moves from the empty board, with
/// `First` moving first. Generation stops at a random point or when the
/// round is over.
#[derive(Clone, Debug)]
pub struct ReachableBoard {
    pub board: Board,
    /// The player whose turn it is.
    pub to_move: Player,
}

impl quickcheck::Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_moves = usize::arbitrary(g) % 10;
        let mut board = Board::new();
        let mut to_move = Player::First;
        for _ in 0..num_moves {
            if board.outcome().is_over() {
                break;
            }
            let legal_moves: Vec<(i8, i8)> = board.legal_moves().collect();
            // Can't be empty, the board is not full
            let &(row, col) = g.choose(&legal_moves).unwrap();
            board.place(row, col, to_move).unwrap();
            to_move = to_move.opponent();
        }
        ReachableBoard { board, to_move }
    }
}
