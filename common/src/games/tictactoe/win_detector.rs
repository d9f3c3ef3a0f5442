use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows top to bottom, columns left to right, then both diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark owning a complete line, or `Mark::Empty` when no line is
/// complete. A full board with `Mark::Empty` is a draw.
pub fn check_win(board: &Board) -> Mark {
    check_win_with_line(board)
        .map(|line| line.mark)
        .unwrap_or(Mark::Empty)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}
