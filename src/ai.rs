// Rule-priority move selection for the computer opponent.
// Deterministic: identical inputs always yield the same index.

use crate::board::Board;
use crate::common::Mark;
use crate::config::{CENTER_CELL, CORNER_CELLS, LINES, SIDE_CELLS};

/// Select the computer's move, or `None` when every cell is occupied.
///
/// The decision policy, first satisfied rule wins:
/// 1. Complete an own line (win now).
/// 2. Fill the cell that would complete an opponent line (block).
/// 3. Take the center.
/// 4. Take the first free corner, scanning `[0, 2, 6, 8]`.
/// 5. Take the first free side, scanning `[1, 3, 5, 7]`.
/// 6. Fall back to the lowest-index empty cell.
///
/// The returned index always refers to a currently-empty cell. Callers are
/// responsible for not invoking the selector on a decided game; no winner
/// re-check happens here.
pub fn select_move(board: &Board, self_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    debug_assert!(self_mark != opponent_mark, "marks must differ");

    if board.is_full() {
        return None;
    }
    let cells = board.cells();

    if let Some(index) = completing_cell(board, self_mark) {
        return Some(index);
    }
    if let Some(index) = completing_cell(board, opponent_mark) {
        return Some(index);
    }

    if cells[CENTER_CELL].is_empty() {
        return Some(CENTER_CELL);
    }

    for index in CORNER_CELLS {
        if cells[index].is_empty() {
            return Some(index);
        }
    }
    for index in SIDE_CELLS {
        if cells[index].is_empty() {
            return Some(index);
        }
    }

    // rules 3-5 already cover every cell of a 3x3 board
    board.empty_cells().next()
}

/// The empty cell of the first line holding exactly two `mark`s and one
/// empty cell, in `LINES` order. `None` when no line is one move from
/// completion for `mark`.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    for line in LINES {
        let mut marked = 0;
        let mut empty = None;
        for index in line {
            match cells[index].mark() {
                Some(found) if found == mark => marked += 1,
                Some(_) => {}
                None => empty = Some(index),
            }
        }
        if marked == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}
