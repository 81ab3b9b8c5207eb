//! Terminal driver for quattro.

pub mod command;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod session;

pub use command::{Command, parse_command};
pub use config::{Config, FirstPlayer, Mode};
pub use difficulty::Difficulty;
pub use error::CliError;
pub use game::{Controller, Game, GameStatus};
pub use session::{Outcome, Session};
