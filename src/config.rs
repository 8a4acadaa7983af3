pub const GRID_SIZE: usize = 3;
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The 8 winning geometries, in the order they are scanned: rows top to
/// bottom, columns left to right, then the two diagonals. Evaluation and
/// tie-breaking both depend on this exact order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const CENTER_CELL: usize = 4;
/// Corner preference order for the move selector. Literal, not derived.
pub const CORNER_CELLS: [usize; 4] = [0, 2, 6, 8];
/// Side preference order for the move selector. Literal, not derived.
pub const SIDE_CELLS: [usize; 4] = [1, 3, 5, 7];

/// Pacing delay before an automatic computer move is applied.
pub const DEFAULT_AI_DELAY_MS: u64 = 150;
