use super::board::{BOARD_SIZE, Board};
use super::types::{Mark, Side};
use super::win_detector::check_win;

/// Ply budget for a full search. Enough to reach the end of any game once
/// the computer has placed its candidate mark.
pub const FULL_DEPTH: i32 = 8;

/// Depth-weighted minimax score of `board` with `side_to_move` about to play.
///
/// A decided board scores `winner * depth`, so a win found with more depth
/// remaining weighs more. Inner nodes add (computer) or subtract (player) the
/// current depth from each child score and keep the best candidate, with the
/// running best seeded at 0 rather than at an extreme.
///
/// The board is mutated during the search and is identical on return.
pub fn minimax(board: &mut Board, side_to_move: Side, depth: i32) -> i32 {
    let winner = check_win(board);
    if winner != Mark::Empty || depth == 0 {
        return winner.value() * depth;
    }

    let mut score = 0;

    for cell in 0..BOARD_SIZE {
        if !board.is_cell_empty(cell) {
            continue;
        }

        let mut branch = board.speculate(cell, side_to_move.mark());
        let child = minimax(&mut branch, side_to_move.opponent(), depth - 1);

        score = match side_to_move {
            Side::Player => score.min(child - depth),
            Side::Computer => score.max(child + depth),
        };
    }

    score
}
