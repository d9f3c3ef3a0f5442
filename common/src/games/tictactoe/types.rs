use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TicTacToeError;

/// Content of a single cell. The numeric values are used directly by the
/// search: a winner's value multiplied by the remaining depth is its score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    #[default]
    Empty,
    Computer,
}

impl Mark {
    pub fn value(&self) -> i32 {
        match self {
            Mark::Player => -1,
            Mark::Empty => 0,
            Mark::Computer => 1,
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Player),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Empty => '.',
            Mark::Computer => 'O',
        }
    }
}

impl TryFrom<i32> for Mark {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Mark::Player),
            0 => Ok(Mark::Empty),
            1 => Ok(Mark::Computer),
            other => Err(other),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn mark(&self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Computer => Mark::Computer,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Player,
    Computer,
    Random,
}

/// A complete line: the shared mark and the three cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[2]
    }
}

pub(crate) fn mark_from_value(index: usize, value: i32) -> Result<Mark, TicTacToeError> {
    Mark::try_from(value).map_err(|value| TicTacToeError::InvalidBoard {
        index,
        value: Some(value),
    })
}
