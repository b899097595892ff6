//! Focus rolls and phenomenal rerolls.
//!
//! On a focus roll every die whose last face is a 2 is a phenomenon: the
//! 2 is dropped and replaced by a fresh exploding d10, which may itself end
//! in a 2 and trigger again. Since dice only explode on a 10, a total of
//! `10 * k + r` always ends in its last face `r`, so `total % 10 == 2`
//! catches twos at the end of an explosion chain too.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::dice::{DieRoller, RandomSource};

/// The result of resolving a focus roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFocusRoll {
    /// Rolls after phenomenal rerolls, in original order.
    pub rolls: Vec<u32>,
    /// Rerolls taken by each original die.
    pub reroll_counts: Vec<u32>,
    /// Total number of twos rerolled across the pool.
    pub phenomenality: u32,
}

impl ResolvedFocusRoll {
    /// A resolution that leaves `rolls` untouched.
    pub fn unchanged(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            reroll_counts: vec![0; rolls.len()],
            phenomenality: 0,
        }
    }
}

/// Resolve phenomenal rerolls for a focus roll.
///
/// Without the `f` attribute the rolls pass through unchanged.
pub fn resolve_focus_roll<R: RandomSource>(
    rolls: &[u32],
    attributes: &Attributes,
    roller: &mut DieRoller<R>,
) -> ResolvedFocusRoll {
    if !attributes.focus {
        return ResolvedFocusRoll::unchanged(rolls);
    }

    let mut resolved = ResolvedFocusRoll {
        rolls: Vec::with_capacity(rolls.len()),
        reroll_counts: Vec::with_capacity(rolls.len()),
        phenomenality: 0,
    };
    for &roll in rolls {
        let mut reroll = roll;
        let mut reroll_count = 0;
        while reroll % 10 == 2 {
            resolved.phenomenality += 1;
            reroll_count += 1;
            let die = roller.roll_die(true);
            reroll = reroll + die - 2;
            tracing::debug!(roll, die, reroll, "phenomenal reroll");
        }
        resolved.rolls.push(reroll);
        resolved.reroll_counts.push(reroll_count);
    }
    resolved
}
