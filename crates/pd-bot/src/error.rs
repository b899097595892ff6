//! Error types for the chat-command layer.

use thiserror::Error;

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors that can occur while handling a chat command.
#[derive(Debug, Error)]
pub enum BotError {
    /// A roll command did not match any known syntax.
    #[error("unrecognized roll command: {0}")]
    UnrecognizedRoll(String),

    /// A die tag named a die the engine does not know.
    #[error(transparent)]
    Mechanics(#[from] pd_mechanics::MechError),

    /// A known die that cannot be rolled on its own.
    #[error("{0} cannot be rolled on its own; use a pool like 6 3")]
    UnsupportedDie(pd_mechanics::Die),

    /// A roll asked for more than the sanity limits allow.
    #[error("roll out of bounds: {count} keep {keep} with {attributes_len} attribute characters")]
    OutOfBounds {
        /// Requested number of dice.
        count: i32,
        /// Requested keep count.
        keep: i32,
        /// Length of the attribute string.
        attributes_len: usize,
    },

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for a bot config.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
