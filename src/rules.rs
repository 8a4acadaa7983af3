//! Win detection: scan the fixed line table for three identical marks.

use crate::board::Board;
use crate::common::Mark;
use crate::config::LINES;

/// Outcome of evaluating a board for a winner.
///
/// `winner` is `None` exactly when `line` is `None`; when present, the three
/// indices in `line` hold the same non-empty mark on the evaluated board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub winner: Option<Mark>,
    pub line: Option<[usize; 3]>,
}

impl Evaluation {
    /// The no-winner result.
    pub fn none() -> Self {
        Evaluation {
            winner: None,
            line: None,
        }
    }
}

/// Evaluate a board for a completed line.
///
/// Lines are scanned in the fixed `LINES` order (rows, columns, diagonals)
/// and the first full match is returned, so the reported line is stable even
/// on boards where several lines are complete. Tolerates any number of
/// filled cells, including none.
pub fn evaluate(board: &Board) -> Evaluation {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a].mark() {
            if cells[b].mark() == Some(mark) && cells[c].mark() == Some(mark) {
                return Evaluation {
                    winner: Some(mark),
                    line: Some(line),
                };
            }
        }
    }
    Evaluation::none()
}
