//! Board state: a fixed 3x3 grid of cells addressed by index `0..9`.

use crate::common::{Cell, GameError, Mark};
use crate::config::{BOARD_CELLS, GRID_SIZE};
use core::fmt;

/// A 3x3 board. Index `i` maps to row `i / 3`, column `i % 3`.
///
/// The board is a plain value: placing a mark produces a new board rather
/// than mutating in place, and a reset replaces it wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Cell contents at `index`.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfBounds { index })
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// A copy of this board with `mark` placed at `index`.
    ///
    /// Fails if the index is out of range or the cell is occupied; the
    /// original board is left untouched either way.
    pub fn placed(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        match self.cell(index)? {
            Cell::Empty => {
                let mut next = *self;
                next.cells[index] = Cell::Marked(mark);
                Ok(next)
            }
            Cell::Marked(_) => Err(GameError::CellOccupied { index }),
        }
    }

    /// Indices of all empty cells, lowest first.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` when no mark has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl From<[Cell; BOARD_CELLS]> for Board {
    fn from(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }
}

/// Parse a compact 9-character layout: `X`, `O`, and `.` or `_` for empty,
/// in index order. Whitespace is ignored, so rows may be split for clarity.
impl core::str::FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut index = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if index >= BOARD_CELLS {
                return Err(GameError::InvalidLayout);
            }
            cells[index] = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' => Cell::Empty,
                _ => return Err(GameError::InvalidLayout),
            };
            index += 1;
        }
        if index != BOARD_CELLS {
            return Err(GameError::InvalidLayout);
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let ch = match self.cells[row * GRID_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Marked(mark) => mark.as_char(),
                };
                write!(f, "{}", ch)?;
            }
            if row + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
