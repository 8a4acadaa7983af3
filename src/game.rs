//! Game state: board, turn order, mode and mark selection.
//!
//! `GameState` is an immutable-per-step value: every action returns a new
//! state instead of mutating in place.

use crate::board::Board;
use crate::common::{GameError, Mark};
use crate::rules::{self, Evaluation};

/// Whether the second seat is driven by a human or by the heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
}

/// Derived status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// One step of a game. X always moves first on a fresh board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next_mark: Mark,
    mode: GameMode,
    human_mark: Mark,
}

impl GameState {
    /// Fresh game: empty board, X to move. `human_mark` only matters in
    /// `HumanVsAi` mode; the computer plays the opposite mark.
    pub fn new(mode: GameMode, human_mark: Mark) -> Self {
        GameState {
            board: Board::new(),
            next_mark: Mark::X,
            mode,
            human_mark,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The computer's mark in `HumanVsAi` mode.
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Evaluate the board for a completed line.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(&self.board)
    }

    /// Derived game status. A draw is a full board with no winner.
    pub fn status(&self) -> GameStatus {
        match self.evaluation().winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Place the current mark at `index` and pass the turn.
    ///
    /// Rejected with `GameOver` once the game is decided and with
    /// `CellOccupied`/`IndexOutOfBounds` for bad targets; `self` is never
    /// modified.
    pub fn play(&self, index: usize) -> Result<GameState, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let board = self.board.placed(index, self.next_mark)?;
        Ok(GameState {
            board,
            next_mark: self.next_mark.opponent(),
            ..*self
        })
    }

    /// Fresh board with the same mode and mark selection, X to move.
    pub fn restart(&self) -> GameState {
        GameState::new(self.mode, self.human_mark)
    }

    /// Switch modes, resetting to a fresh board.
    pub fn with_mode(&self, mode: GameMode) -> GameState {
        GameState::new(mode, self.human_mark)
    }

    /// Reassign the human mark, resetting to a fresh board.
    pub fn with_human_mark(&self, human_mark: Mark) -> GameState {
        GameState::new(self.mode, human_mark)
    }

    /// Returns `true` when the computer owns the next move: `HumanVsAi`
    /// mode, the computer's mark is up, and the game is still undecided.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi
            && self.next_mark == self.ai_mark()
            && self.status() == GameStatus::InProgress
    }
}
