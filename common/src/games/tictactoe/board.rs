use std::fmt;
use std::ops::{Deref, DerefMut};

use super::error::TicTacToeError;
use super::types::{Mark, mark_from_value};

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

/// Nine cells in row-major order: 0, 1, 2 is the top row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Builds a board from the signed cell encoding (-1 player, 0 empty, 1 computer).
    pub fn from_values(values: &[i32]) -> Result<Self, TicTacToeError> {
        if values.len() != BOARD_SIZE {
            return Err(TicTacToeError::InvalidBoard {
                index: values.len(),
                value: None,
            });
        }

        let mut cells = [Mark::Empty; BOARD_SIZE];
        for (index, &value) in values.iter().enumerate() {
            cells[index] = mark_from_value(index, value)?;
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn is_cell_empty(&self, cell: usize) -> bool {
        self.get(cell) == Some(Mark::Empty)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(cell, _)| cell)
    }

    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), TicTacToeError> {
        match self.cells.get(cell) {
            None => Err(TicTacToeError::CellOutOfBounds { cell }),
            Some(Mark::Empty) => {
                self.cells[cell] = mark;
                Ok(())
            }
            Some(_) => Err(TicTacToeError::IllegalMove { cell }),
        }
    }

    /// The same position with the two sides swapped.
    pub fn mirrored(&self) -> Board {
        Board {
            cells: self.cells.map(|mark| mark.opponent().unwrap_or(Mark::Empty)),
        }
    }

    /// Places `mark` on an empty cell for as long as the returned guard lives.
    /// The cell is emptied again when the guard is dropped.
    pub fn speculate(&mut self, cell: usize, mark: Mark) -> Speculation<'_> {
        debug_assert!(self.is_cell_empty(cell), "speculating on a marked cell {}", cell);
        self.cells[cell] = mark;
        Speculation { board: self, cell }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_WIDTH) {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

pub struct Speculation<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.cell] = Mark::Empty;
    }
}
