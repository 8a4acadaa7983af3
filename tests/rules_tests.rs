use tictactoe::{evaluate, Board, Evaluation, Mark};

fn board(layout: &str) -> Board {
    layout.parse().expect("test layout is well-formed")
}

#[test]
fn test_empty_board_has_no_winner() {
    let result = evaluate(&Board::new());
    assert_eq!(result, Evaluation::none());
}

#[test]
fn test_row_win_reports_mark_and_line() {
    let result = evaluate(&board(
        "XXX
         OO.
         ...",
    ));
    assert_eq!(result.winner, Some(Mark::X));
    assert_eq!(result.line, Some([0, 1, 2]));
}

#[test]
fn test_bottom_row_win() {
    let result = evaluate(&board(
        "XX.
         .X.
         OOO",
    ));
    assert_eq!(result.winner, Some(Mark::O));
    assert_eq!(result.line, Some([6, 7, 8]));
}

#[test]
fn test_column_win() {
    let result = evaluate(&board(
        "OX.
         OX.
         O.X",
    ));
    assert_eq!(result.winner, Some(Mark::O));
    assert_eq!(result.line, Some([0, 3, 6]));
}

#[test]
fn test_diagonal_wins() {
    let result = evaluate(&board(
        "X.O
         OX.
         ..X",
    ));
    assert_eq!(result.winner, Some(Mark::X));
    assert_eq!(result.line, Some([0, 4, 8]));

    let result = evaluate(&board(
        "X.O
         XO.
         O.X",
    ));
    assert_eq!(result.winner, Some(Mark::O));
    assert_eq!(result.line, Some([2, 4, 6]));
}

#[test]
fn test_full_board_without_line_is_no_winner() {
    // the caller derives "draw" from this plus a full board
    let result = evaluate(&board(
        "XOX
         XOO
         OXX",
    ));
    assert_eq!(result, Evaluation::none());
}

#[test]
fn test_first_matching_line_wins_ties() {
    // both the top row and the left column are complete; rows are scanned
    // first, so the row is reported
    let result = evaluate(&board(
        "XXX
         XOO
         XOO",
    ));
    assert_eq!(result.winner, Some(Mark::X));
    assert_eq!(result.line, Some([0, 1, 2]));
}

#[test]
fn test_two_marks_on_a_line_is_not_a_win() {
    let result = evaluate(&board(
        "XX.
         .O.
         ..O",
    ));
    assert_eq!(result, Evaluation::none());
}

#[test]
fn test_evaluate_is_idempotent() {
    let b = board(
        "XO.
         .XO
         ..X",
    );
    assert_eq!(evaluate(&b), evaluate(&b));
}
