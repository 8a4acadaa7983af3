#![cfg(feature = "std")]

//! Interactive game session: owns the current state, reads player commands
//! and schedules the computer opponent's deferred moves.
//!
//! The computer never moves inline. When it gains the turn, a task is
//! spawned that sleeps a fixed pacing delay, computes the move against the
//! board snapshot captured at schedule time, and sends it back over a
//! channel. Each board-resetting action bumps the session generation, and a
//! delivery tagged with an older generation is dropped, so a restart while a
//! move is pending can never resurrect the previous game's board.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::ai;
use crate::board::Board;
use crate::game::GameState;
use crate::ui::{self, Command};

/// A computer move computed against a by-value board snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledMove {
    /// Session generation at schedule time.
    pub generation: u64,
    /// The board the move was computed against.
    pub board: Board,
    /// Chosen cell index.
    pub index: usize,
}

/// Event loop state for one interactive game.
pub struct Session {
    state: GameState,
    generation: u64,
    delay: Duration,
    moves_tx: mpsc::UnboundedSender<ScheduledMove>,
    moves_rx: mpsc::UnboundedReceiver<ScheduledMove>,
}

impl Session {
    pub fn new(state: GameState, delay: Duration) -> Self {
        let (moves_tx, moves_rx) = mpsc::unbounded_channel();
        Session {
            state,
            generation: 0,
            delay,
            moves_tx,
            moves_rx,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one player command. Returns `false` when the session should
    /// end.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Restart => {
                info!("restarting game");
                self.reset_to(self.state.restart());
            }
            Command::Mode(mode) => {
                info!("switching mode, board reset");
                self.reset_to(self.state.with_mode(mode));
            }
            Command::HumanMark(mark) => {
                info!("human now plays {}, board reset", mark);
                self.reset_to(self.state.with_human_mark(mark));
            }
            Command::Cell(index) => self.play_cell(index),
        }
        true
    }

    /// Apply a delivered computer move, unless it is stale or the game has
    /// moved on. Returns `true` when the move was placed on the board.
    pub fn apply_scheduled(&mut self, scheduled: ScheduledMove) -> bool {
        if scheduled.generation != self.generation {
            debug!(
                "discarding computer move for cell {} from generation {}",
                scheduled.index, scheduled.generation
            );
            return false;
        }
        if !self.state.is_ai_turn() {
            return false;
        }
        match self.state.play(scheduled.index) {
            Ok(next) => {
                info!(
                    "computer played {}",
                    ui::describe_move(self.state.next_mark(), scheduled.index)
                );
                self.state = next;
                true
            }
            Err(err) => {
                warn!("computer move rejected: {}", err);
                false
            }
        }
    }

    /// Wait for the next scheduled computer move to be delivered.
    pub async fn recv_scheduled(&mut self) -> Option<ScheduledMove> {
        self.moves_rx.recv().await
    }

    /// Kick off the opening computer move if the computer holds X.
    pub fn schedule_opening_move(&mut self) {
        self.maybe_schedule_ai();
    }

    fn play_cell(&mut self, index: usize) {
        if self.state.is_ai_turn() {
            println!("The computer moves next; wait for it.");
            return;
        }
        let mark = self.state.next_mark();
        match self.state.play(index) {
            Ok(next) => {
                debug!("{}", ui::describe_move(mark, index));
                self.state = next;
                self.maybe_schedule_ai();
            }
            Err(err) => {
                debug!("rejected input for cell {}: {}", index, err);
                println!("Ignored: {}", err);
            }
        }
    }

    fn reset_to(&mut self, state: GameState) {
        self.state = state;
        self.generation += 1;
        self.maybe_schedule_ai();
    }

    fn maybe_schedule_ai(&mut self) {
        if !self.state.is_ai_turn() {
            return;
        }
        let board = *self.state.board();
        let ai_mark = self.state.ai_mark();
        let human_mark = self.state.human_mark();
        let generation = self.generation;
        let delay = self.delay;
        let tx = self.moves_tx.clone();
        debug!("scheduling computer move in {:?}", delay);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(index) = ai::select_move(&board, ai_mark, human_mark) {
                let _ = tx.send(ScheduledMove {
                    generation,
                    board,
                    index,
                });
            }
        });
    }

    /// Run the interactive loop until the player quits or input ends.
    pub async fn run(mut self) -> anyhow::Result<()> {
        println!(
            "Commands: a coordinate like B2, 'restart', 'mode single|two', 'mark x|o', 'quit'."
        );
        self.schedule_opening_move();
        ui::print_state(&self.state);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match ui::parse_command(&line) {
                        Some(command) => {
                            if !self.handle_command(command) {
                                break;
                            }
                            ui::print_state(&self.state);
                        }
                        None => println!("Unrecognized input: {}", line.trim()),
                    }
                }
                Some(scheduled) = self.moves_rx.recv() => {
                    if self.apply_scheduled(scheduled) {
                        ui::print_state(&self.state);
                    }
                }
            }
        }
        Ok(())
    }
}
