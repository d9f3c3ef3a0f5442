mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, BOARD_WIDTH, Board, Speculation};
pub use bot_controller::{ScoredMove, TieBreak, TieBreakRng, score_moves, select_move, select_move_with};
pub use error::TicTacToeError;
pub use game_state::TicTacToeGameState;
pub use minimax::{FULL_DEPTH, minimax};
pub use types::{FirstPlayerMode, GameStatus, Mark, Side, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
