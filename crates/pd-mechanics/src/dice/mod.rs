//! Dice types, randomness sources, and rolling.
//!
//! Past Due rolls pools of d10s that explode on a 10, plus the occasional
//! d100 for percentile tables. Every draw goes through a [`RandomSource`]
//! so rolls can be seeded or scripted.

pub mod roller;

pub use roller::DieRoller;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A die used by the Past Due rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// The ten-sided skill die.
    D10,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D100 => 100,
        }
    }

    /// Parse a die from a string like "d10" or "D100".
    pub fn from_str_tag(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "d10" => Ok(Self::D10),
            "d100" => Ok(Self::D100),
            _ => Err(MechError::UnknownDie(s.to_string())),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer from `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// A deterministic source that replays a fixed list of draws.
///
/// Values cycle once the list is exhausted and are clamped into the
/// requested range. An empty list always yields `low`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
