#![cfg(feature = "std")]

use crate::board::Board;
use crate::common::{Cell, Mark};
use crate::config::GRID_SIZE;
use crate::game::{GameMode, GameState, GameStatus};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at this cell index.
    Cell(usize),
    /// Fresh board, keeping mode and mark selection.
    Restart,
    /// Switch game mode (resets the board).
    Mode(GameMode),
    /// Reassign the human mark (resets the board).
    HumanMark(Mark),
    Quit,
}

fn coord_to_string(index: usize) -> String {
    let col = (b'A' + (index % GRID_SIZE) as u8) as char;
    format!("{}{}", col, index / GRID_SIZE + 1)
}

/// Parse a board coordinate such as `B3` (column letter, row number) into a
/// cell index.
pub fn parse_coord(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if col >= GRID_SIZE || row == 0 || row > GRID_SIZE {
        return None;
    }
    Some((row - 1) * GRID_SIZE + col)
}

/// Parse one input line into a [`Command`]. `None` means unrecognized input.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    match parts.next()? {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "restart" => Some(Command::Restart),
        "mode" => match parts.next()? {
            "single" | "ai" => Some(Command::Mode(GameMode::HumanVsAi)),
            "two" | "pvp" => Some(Command::Mode(GameMode::HumanVsHuman)),
            _ => None,
        },
        "mark" => match parts.next()? {
            "x" | "X" => Some(Command::HumanMark(Mark::X)),
            "o" | "O" => Some(Command::HumanMark(Mark::O)),
            _ => None,
        },
        coord if parts.next().is_none() => parse_coord(coord).map(Command::Cell),
        _ => None,
    }
}

/// Print the board with coordinate labels, highlighting a winning line.
pub fn print_board(board: &Board, winning_line: Option<[usize; 3]>) {
    print!("   ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..GRID_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let index = r * GRID_SIZE + c;
            let on_line = winning_line.is_some_and(|line| line.contains(&index));
            let ch = match board.cell(index).ok() {
                Some(Cell::Marked(mark)) if on_line => mark.as_char().to_ascii_lowercase(),
                Some(Cell::Marked(mark)) => mark.as_char(),
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// The status line shown above the board: winner, draw, or whose turn it is.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(mark) => format!("{} wins!", mark),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => {
            let mark = state.next_mark();
            let seat = match state.mode() {
                GameMode::HumanVsHuman => "",
                GameMode::HumanVsAi if mark == state.human_mark() => " (You)",
                GameMode::HumanVsAi => " (AI)",
            };
            format!("{}'s turn{}", mark, seat)
        }
    }
}

/// Print the status line and current board.
pub fn print_state(state: &GameState) {
    println!();
    println!("{}", status_line(state));
    print_board(state.board(), state.evaluation().line);
}

/// One-line move announcement, e.g. `O -> B2`.
pub fn describe_move(mark: Mark, index: usize) -> String {
    format!("{} -> {}", mark, coord_to_string(index))
}
