use tictactoe::{Board, Cell, GameError, Mark};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
fn test_placed_returns_a_new_board() {
    let board = Board::new();
    let next = board.placed(4, Mark::X).unwrap();
    assert_eq!(next.cell(4).unwrap(), Cell::Marked(Mark::X));
    // the source board is a value, untouched by the placement
    assert!(board.is_empty());
}

#[test]
fn test_placed_rejects_occupied_and_out_of_range() {
    let board = Board::new().placed(0, Mark::X).unwrap();
    assert_eq!(
        board.placed(0, Mark::O).unwrap_err(),
        GameError::CellOccupied { index: 0 }
    );
    assert_eq!(
        board.placed(9, Mark::O).unwrap_err(),
        GameError::IndexOutOfBounds { index: 9 }
    );
}

#[test]
fn test_empty_cells_are_listed_lowest_first() {
    let board: Board = "XOX
                        .O.
                        X.O"
        .parse()
        .unwrap();
    let empty: Vec<usize> = board.empty_cells().collect();
    assert_eq!(empty, vec![3, 5, 7]);
}

#[test]
fn test_layout_roundtrip() {
    let board: Board = "X.O
                        .X.
                        O.X"
        .parse()
        .unwrap();
    let reparsed: Board = board.to_string().parse().unwrap();
    assert_eq!(board, reparsed);
}

#[test]
fn test_malformed_layouts_are_rejected() {
    assert_eq!("XO".parse::<Board>().unwrap_err(), GameError::InvalidLayout);
    assert_eq!(
        "XOXOXOXOXO".parse::<Board>().unwrap_err(),
        GameError::InvalidLayout
    );
    assert_eq!(
        "XOXOXOXO?".parse::<Board>().unwrap_err(),
        GameError::InvalidLayout
    );
}
