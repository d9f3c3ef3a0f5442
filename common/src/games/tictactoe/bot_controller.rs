use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::error::TicTacToeError;
use super::minimax::{FULL_DEPTH, minimax};
use super::types::{Mark, Side};
use super::win_detector::check_win;

/// Random source consulted when two candidate moves score the same.
pub trait TieBreakRng {
    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl TieBreakRng for SessionRng {
    fn chance(&mut self, probability: f64) -> bool {
        SessionRng::chance(self, probability)
    }
}

/// How a move that ties the best score so far is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Replace the current best with probability 1/2 on every tie. Later
    /// cells in scan order end up more likely than earlier ones.
    #[default]
    Sequential,
    /// Replace the current best with probability 1/k on the k-th tie, so all
    /// tied moves are equally likely.
    Uniform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub cell: usize,
    pub score: i32,
}

/// Scores every empty cell as a computer move, in ascending cell order.
pub fn score_moves(board: &Board) -> Vec<ScoredMove> {
    let mut board = *board;
    let candidates: Vec<usize> = board.empty_cells().collect();

    candidates
        .into_iter()
        .map(|cell| {
            let mut branch = board.speculate(cell, Mark::Computer);
            let score = minimax(&mut branch, Side::Player, FULL_DEPTH);
            ScoredMove { cell, score }
        })
        .collect()
}

pub fn select_move<R: TieBreakRng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, TicTacToeError> {
    select_move_with(board, TieBreak::Sequential, rng)
}

/// Picks the computer's move: the highest scored cell, ties resolved by
/// `tie_break` using `rng`. Fails on a board that is already decided or full.
pub fn select_move_with<R: TieBreakRng + ?Sized>(
    board: &Board,
    tie_break: TieBreak,
    rng: &mut R,
) -> Result<usize, TicTacToeError> {
    if check_win(board) != Mark::Empty || board.is_full() {
        return Err(TicTacToeError::NoLegalMove);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut ties = 0u32;

    for ScoredMove { cell, score } in score_moves(board) {
        if score > best_score {
            best_score = score;
            best_move = Some(cell);
            ties = 1;
        } else if score == best_score {
            ties += 1;
            let probability = match tie_break {
                TieBreak::Sequential => 0.5,
                TieBreak::Uniform => 1.0 / ties as f64,
            };
            if rng.chance(probability) {
                best_move = Some(cell);
            }
        }
    }

    best_move.ok_or(TicTacToeError::NoLegalMove)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::BOARD_SIZE;

    struct FixedCoin(bool);

    impl TieBreakRng for FixedCoin {
        fn chance(&mut self, _probability: f64) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingCoin {
        asked: Vec<f64>,
    }

    impl TieBreakRng for RecordingCoin {
        fn chance(&mut self, probability: f64) -> bool {
            self.asked.push(probability);
            false
        }
    }

    fn best_cells(board: &Board) -> Vec<usize> {
        let scored = score_moves(board);
        let best = scored.iter().map(|m| m.score).max().unwrap();
        scored.iter().filter(|m| m.score == best).map(|m| m.cell).collect()
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_values(&[1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        let mut rng = SessionRng::new(42);
        assert_eq!(select_move(&board, &mut rng), Ok(2));
    }

    #[test]
    fn test_blocks_open_row() {
        let board = Board::from_values(&[-1, -1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        for seed in 0..8 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(select_move(&board, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_forced_win_scores() {
        let board = Board::from_values(&[1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        let scores: Vec<(usize, i32)> = score_moves(&board).iter().map(|m| (m.cell, m.score)).collect();
        assert_eq!(scores, vec![(2, 8), (5, -2), (6, -15), (7, -15), (8, -15)]);
    }

    #[test]
    fn test_selection_leaves_board_unchanged() {
        let board = Board::from_values(&[0, -1, 0, 0, 1, 0, -1, 0, 0]).unwrap();
        let copy = board;
        let mut rng = SessionRng::new(3);
        select_move(&board, &mut rng).unwrap();
        assert_eq!(board, copy);
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = Board::from_values(&[1, -1, 1, -1, 1, -1, -1, 1, -1]).unwrap();
        let mut rng = SessionRng::new(0);
        assert_eq!(select_move(&board, &mut rng), Err(TicTacToeError::NoLegalMove));
    }

    #[test]
    fn test_decided_board_has_no_legal_move() {
        let board = Board::from_values(&[-1, -1, -1, 1, 1, 0, 0, 0, 0]).unwrap();
        let mut rng = SessionRng::new(0);
        assert_eq!(select_move(&board, &mut rng), Err(TicTacToeError::NoLegalMove));
    }

    #[test]
    fn test_empty_board_ties_every_cell() {
        let scored = score_moves(&Board::new());
        assert_eq!(scored.len(), BOARD_SIZE);
        assert!(scored.iter().all(|m| m.score == scored[0].score));
    }

    #[test]
    fn test_sequential_tie_break_always_replacing_picks_last_tie() {
        let mut coin = FixedCoin(true);
        assert_eq!(select_move(&Board::new(), &mut coin), Ok(8));
    }

    #[test]
    fn test_sequential_tie_break_never_replacing_keeps_first_tie() {
        let mut coin = FixedCoin(false);
        assert_eq!(select_move(&Board::new(), &mut coin), Ok(0));
    }

    #[test]
    fn test_sequential_tie_break_flips_fair_coin_per_tie() {
        let mut coin = RecordingCoin::default();
        select_move(&Board::new(), &mut coin).unwrap();
        assert_eq!(coin.asked, vec![0.5; 8]);
    }

    #[test]
    fn test_uniform_tie_break_uses_reservoir_odds() {
        let mut coin = RecordingCoin::default();
        select_move_with(&Board::new(), TieBreak::Uniform, &mut coin).unwrap();
        let expected: Vec<f64> = (2..=9).map(|k| 1.0 / k as f64).collect();
        assert_eq!(coin.asked, expected);
    }

    #[test]
    fn test_strictly_better_move_skips_coin() {
        let board = Board::from_values(&[1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        let mut coin = RecordingCoin::default();
        assert_eq!(select_move(&board, &mut coin), Ok(2));
        // Cells 6, 7 and 8 tie each other but never the best score.
        assert!(coin.asked.is_empty());
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let board = Board::new();
        let mut a = SessionRng::new(1234);
        let mut b = SessionRng::new(1234);
        let left: Vec<usize> = (0..6).map(|_| select_move(&board, &mut a).unwrap()).collect();
        let right: Vec<usize> = (0..6).map(|_| select_move(&board, &mut b).unwrap()).collect();
        assert_eq!(left, right);
    }

    fn assert_computer_never_loses(board: &mut Board, to_move: Side) {
        let winner = check_win(board);
        assert_ne!(winner, Mark::Player, "computer lost:\n{}", board);
        if winner != Mark::Empty || board.is_full() {
            return;
        }

        let cells: Vec<usize> = match to_move {
            Side::Computer => best_cells(board),
            Side::Player => board.empty_cells().collect(),
        };
        for cell in cells {
            let mut branch = board.speculate(cell, to_move.mark());
            assert_computer_never_loses(&mut branch, to_move.opponent());
        }
    }

    #[test]
    fn test_computer_never_loses_moving_first() {
        assert_computer_never_loses(&mut Board::new(), Side::Computer);
    }

    #[test]
    fn test_computer_never_loses_moving_second() {
        assert_computer_never_loses(&mut Board::new(), Side::Player);
    }
}
