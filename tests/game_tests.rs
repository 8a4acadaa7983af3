use tictactoe::{GameError, GameMode, GameState, GameStatus, Mark};

#[test]
fn test_fresh_game_starts_with_x() {
    let state = GameState::new(GameMode::HumanVsHuman, Mark::X);
    assert_eq!(state.next_mark(), Mark::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.board().is_empty());
}

#[test]
fn test_play_places_mark_and_passes_turn() {
    let state = GameState::new(GameMode::HumanVsHuman, Mark::X);
    let next = state.play(4).unwrap();
    assert_eq!(next.board().cell(4).unwrap().mark(), Some(Mark::X));
    assert_eq!(next.next_mark(), Mark::O);
    // the original step is untouched
    assert!(state.board().is_empty());
    assert_eq!(state.next_mark(), Mark::X);
}

#[test]
fn test_rejects_occupied_cell_and_bad_index() {
    let state = GameState::new(GameMode::HumanVsHuman, Mark::X)
        .play(0)
        .unwrap();
    assert_eq!(state.play(0).unwrap_err(), GameError::CellOccupied { index: 0 });
    assert_eq!(
        state.play(9).unwrap_err(),
        GameError::IndexOutOfBounds { index: 9 }
    );
}

#[test]
fn test_win_ends_the_game() {
    // X: 0, 1, 2 across the top; O: 3, 4
    let state = GameState::new(GameMode::HumanVsHuman, Mark::X);
    let state = state.play(0).unwrap().play(3).unwrap();
    let state = state.play(1).unwrap().play(4).unwrap();
    let state = state.play(2).unwrap();
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert_eq!(state.evaluation().line, Some([0, 1, 2]));
    assert_eq!(state.play(5).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_full_board_without_winner_is_a_draw() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut state = GameState::new(GameMode::HumanVsHuman, Mark::X);
    for index in moves {
        state = state.play(index).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.evaluation().winner, None);
    assert_eq!(state.play(0).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_restart_keeps_mode_and_mark() {
    let state = GameState::new(GameMode::HumanVsAi, Mark::O);
    let played = state.play(0).unwrap();
    let fresh = played.restart();
    assert!(fresh.board().is_empty());
    assert_eq!(fresh.next_mark(), Mark::X);
    assert_eq!(fresh.mode(), GameMode::HumanVsAi);
    assert_eq!(fresh.human_mark(), Mark::O);
}

#[test]
fn test_mode_and_mark_changes_reset_the_board() {
    let state = GameState::new(GameMode::HumanVsHuman, Mark::X)
        .play(0)
        .unwrap();

    let single = state.with_mode(GameMode::HumanVsAi);
    assert!(single.board().is_empty());
    assert_eq!(single.mode(), GameMode::HumanVsAi);

    let as_o = single.with_human_mark(Mark::O);
    assert!(as_o.board().is_empty());
    assert_eq!(as_o.human_mark(), Mark::O);
    assert_eq!(as_o.ai_mark(), Mark::X);
}

#[test]
fn test_ai_turn_derivation() {
    // human plays O, so the computer owns the opening X move
    let state = GameState::new(GameMode::HumanVsAi, Mark::O);
    assert!(state.is_ai_turn());

    let after_ai = state.play(4).unwrap();
    assert!(!after_ai.is_ai_turn());

    // never the computer's turn in a two-player game
    let pvp = GameState::new(GameMode::HumanVsHuman, Mark::X);
    assert!(!pvp.play(0).unwrap().is_ai_turn());
}

#[test]
fn test_ai_turn_is_over_once_decided() {
    // X: 0, 1, 2; O: 3, 4 — X (the computer) just won
    let state = GameState::new(GameMode::HumanVsAi, Mark::O);
    let state = state.play(0).unwrap().play(3).unwrap();
    let state = state.play(1).unwrap().play(4).unwrap();
    let state = state.play(2).unwrap();
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert!(!state.is_ai_turn());
}
