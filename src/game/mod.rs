//! Game sessions: setup, the command surface and turn order.
//!
//! - `Setup`: roster to a dealt `Game`
//! - `Game`: board, seats and pool; applies `Command`s
//! - `Command` / `CommandOutcome`: what a transport layer sends and gets back

mod command;
mod setup;
mod state;

pub use command::{Command, CommandOutcome, Placement};
pub use setup::Setup;
pub use state::Game;
