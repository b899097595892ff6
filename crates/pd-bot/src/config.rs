//! Configuration for the chat-command layer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BotError, BotResult};

/// Sanity bounds applied to roll commands before anything is rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollLimits {
    /// Smallest accepted die count.
    pub min_count: i32,
    /// Largest accepted die count.
    pub max_count: i32,
    /// Smallest accepted keep count.
    pub min_keep: i32,
    /// Largest accepted keep count.
    pub max_keep: i32,
    /// Attribute strings must be shorter than this many characters.
    pub max_attributes_len: usize,
}

impl Default for RollLimits {
    fn default() -> Self {
        Self {
            min_count: -10,
            max_count: 10,
            min_keep: -9,
            max_keep: 9,
            max_attributes_len: 20,
        }
    }
}

impl RollLimits {
    /// Returns true if the roll is within bounds.
    pub fn allows(&self, count: i32, keep: i32, attributes: &str) -> bool {
        (self.min_count..=self.max_count).contains(&count)
            && (self.min_keep..=self.max_keep).contains(&keep)
            && attributes.chars().count() < self.max_attributes_len
    }

    /// Reject rolls outside the bounds.
    pub fn check(&self, count: i32, keep: i32, attributes: &str) -> BotResult<()> {
        if self.allows(count, keep, attributes) {
            Ok(())
        } else {
            Err(BotError::OutOfBounds {
                count,
                keep,
                attributes_len: attributes.chars().count(),
            })
        }
    }
}

/// Configuration for a [`Bot`](crate::Bot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix that marks a message as a command.
    pub prefix: String,
    /// RNG seed for reproducible rolls. Unset draws from the OS.
    pub seed: Option<u64>,
    /// Sanity bounds for roll commands.
    pub limits: RollLimits,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            seed: None,
            limits: RollLimits::default(),
        }
    }
}

impl BotConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> BotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded bot config");
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the roll limits.
    pub fn with_limits(mut self, limits: RollLimits) -> Self {
        self.limits = limits;
        self
    }
}
