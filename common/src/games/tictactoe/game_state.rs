use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{TieBreak, select_move_with};
use super::error::TicTacToeError;
use super::types::{FirstPlayerMode, GameStatus, Mark, Side, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub first_side: Side,
    pub current_side: Side,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first_side = match first_player_mode {
            FirstPlayerMode::Player => Side::Player,
            FirstPlayerMode::Computer => Side::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Side::Player
                } else {
                    Side::Computer
                }
            }
        };

        Self {
            board: Board::new(),
            first_side,
            current_side: first_side,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, side: Side, cell: usize) -> Result<(), TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        if side != self.current_side {
            return Err(TicTacToeError::NotYourTurn { side });
        }

        self.board.place(cell, side.mark())?;
        self.last_move = Some(cell);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_side = self.current_side.opponent();
        }

        Ok(())
    }

    /// Lets the computer pick and play its move. Returns the chosen cell.
    pub fn play_computer_move(
        &mut self,
        tie_break: TieBreak,
        rng: &mut SessionRng,
    ) -> Result<usize, TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }

        if self.current_side != Side::Computer {
            return Err(TicTacToeError::NotYourTurn { side: Side::Computer });
        }

        let cell = select_move_with(&self.board, tie_break, rng)?;
        self.place_mark(Side::Computer, cell)?;
        Ok(cell)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_side == Side::Computer
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.mark {
                Mark::Player => GameStatus::PlayerWon,
                Mark::Computer => GameStatus::ComputerWon,
                Mark::Empty => unreachable!(),
            };
            self.winning_line = Some(line);
            log!("{:?} won on line {:?}", line.mark, line.cells);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log!("Game ended in a draw");
        }
    }
}
