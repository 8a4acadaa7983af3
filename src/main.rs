#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use tictactoe::{
    config::DEFAULT_AI_DELAY_MS, init_logging, GameMode, GameState, Mark, Session,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    /// Play against the computer.
    Single,
    /// Two players sharing the terminal.
    Two,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum MarkArg {
    X,
    O,
    /// Let the RNG decide which mark you play.
    Random,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Single)]
        mode: ModeArg,
        #[arg(long, value_enum, default_value_t = MarkArg::X, help = "Your mark in single mode; X always moves first")]
        mark: MarkArg,
        #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pacing delay before the computer moves, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Fix RNG seed for reproducible mark assignment (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            mark,
            delay_ms,
            seed,
        } => {
            let mode = match mode {
                ModeArg::Single => GameMode::HumanVsAi,
                ModeArg::Two => GameMode::HumanVsHuman,
            };
            let human_mark = match mark {
                MarkArg::X => Mark::X,
                MarkArg::O => Mark::O,
                MarkArg::Random => {
                    let mut rng = if let Some(s) = seed {
                        SmallRng::seed_from_u64(s)
                    } else {
                        let mut seed_rng = rand::rng();
                        SmallRng::from_rng(&mut seed_rng)
                    };
                    if rng.random() {
                        Mark::X
                    } else {
                        Mark::O
                    }
                }
            };
            if mode == GameMode::HumanVsAi {
                println!("You play {}; the computer plays {}.", human_mark, human_mark.opponent());
            }

            let state = GameState::new(mode, human_mark);
            let session = Session::new(state, Duration::from_millis(delay_ms));
            session.run().await?;
        }
    }

    Ok(())
}
