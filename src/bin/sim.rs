use serde_json::json;
use tictactoe::{select_move, GameMode, GameState, GameStatus, Mark};

/// Play one heuristic-vs-heuristic game and print a JSON move trace.
/// Both seats use the same rule-priority selector, so the game is fully
/// deterministic.
fn main() -> anyhow::Result<()> {
    let mut state = GameState::new(GameMode::HumanVsHuman, Mark::X);
    let mut moves = Vec::new();

    while state.status() == GameStatus::InProgress {
        let mark = state.next_mark();
        let index = select_move(state.board(), mark, mark.opponent())
            .ok_or_else(|| anyhow::anyhow!("no move available on an undecided board"))?;
        state = state.play(index)?;
        moves.push(json!({ "mark": mark.to_string(), "cell": index }));
    }

    let evaluation = state.evaluation();
    let result = json!({
        "moves": moves,
        "status": format!("{:?}", state.status()),
        "winner": evaluation.winner.map(|m| m.to_string()),
        "line": evaluation.line,
        "board": state.board().to_string(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
