#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod board;
mod common;
pub mod config;
mod game;
mod rules;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use game::*;
pub use rules::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
