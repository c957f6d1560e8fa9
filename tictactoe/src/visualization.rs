use crate::{Board, BOARD_SIZE};

/// Draws the board as a grid with 1-based row and column labels, e.g.
///
/// ```text
///      1   2   3
///    ╭───┬───┬───╮
///  1 │ X │   │ O │
///    ├───┼───┼───┤
///  2 │   │ X │   │
///    ├───┼───┼───┤
///  3 │   │   │   │
///    ╰───┴───┴───╯
/// ```
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("   ");
    for col in 1..=BOARD_SIZE {
        result += &format!(" {:^3}", col);
    }
    result += "\n   ╭───┬───┬───╮\n";

    for row in 0..BOARD_SIZE {
        if row > 0 {
            result += "   ├───┼───┼───┤\n";
        }
        result += &format!("{:>2} │", row + 1);
        for col in 0..BOARD_SIZE {
            let symbol = board
                .get(row, col)
                .and_then(|cell| cell.mark())
                .map(|player| player.symbol())
                .unwrap_or(' ');
            result += &format!(" {} │", symbol);
        }
        result += "\n";
    }
    result += "   ╰───┴───┴───╯";
    result
}
