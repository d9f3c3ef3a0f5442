use super::types::Side;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    IllegalMove { cell: usize },
    CellOutOfBounds { cell: usize },
    /// `value` is `None` when the cell sequence itself has the wrong length.
    InvalidBoard { index: usize, value: Option<i32> },
    NoLegalMove,
    GameOver,
    NotYourTurn { side: Side },
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::IllegalMove { cell } => write!(f, "Cell {} is already marked", cell),
            TicTacToeError::CellOutOfBounds { cell } => {
                write!(f, "Cell {} is out of bounds", cell)
            }
            TicTacToeError::InvalidBoard { index, value: Some(value) } => {
                write!(f, "Invalid cell value {} at index {}", value, index)
            }
            TicTacToeError::InvalidBoard { index, value: None } => {
                write!(f, "Board must have 9 cells, got {}", index)
            }
            TicTacToeError::NoLegalMove => write!(f, "No legal move left on the board"),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
            TicTacToeError::NotYourTurn { side } => write!(f, "Not {}'s turn", side),
        }
    }
}

impl std::error::Error for TicTacToeError {}
