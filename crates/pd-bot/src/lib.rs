//! Chat-command layer for the Past Due dice roller.
//!
//! Turns chat messages like `!r 6 3 +f` or `!r d100` into engine calls and
//! formats the results as replies. The transport (a chat network, a
//! terminal) stays with the caller: [`Bot`] takes one message in and hands
//! one reply back.

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod reply;

pub use bot::Bot;
pub use command::{Command, parse_command};
pub use config::{BotConfig, RollLimits};
pub use error::{BotError, BotResult};
