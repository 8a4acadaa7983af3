//! Common types for tic-tac-toe: player marks, cells and game errors.

/// One of the two symbols a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark held by the other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Holds one player's mark.
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Errors returned by board and game-state operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell index is outside `0..9`.
    IndexOutOfBounds { index: usize },
    /// Attempted to place a mark into an occupied cell.
    CellOccupied { index: usize },
    /// Attempted to play after the game was decided.
    GameOver,
    /// A textual board layout did not describe exactly 9 valid cells.
    InvalidLayout,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::IndexOutOfBounds { index } => {
                write!(f, "cell index {} is out of range", index)
            }
            GameError::CellOccupied { index } => {
                write!(f, "cell {} is already marked", index)
            }
            GameError::GameOver => write!(f, "game is already over"),
            GameError::InvalidLayout => write!(f, "board layout is malformed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
