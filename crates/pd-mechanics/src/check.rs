//! The full roll pipeline.
//!
//! A roll request flows through the engine in a fixed order:
//! 1. roll the pool (dice explode only when something is kept)
//! 2. resolve phenomenal rerolls on a focus roll
//! 3. check stress against the adjusted rolls
//! 4. score the adjusted rolls, with attributes doubled per phenomenon

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::dice::{DieRoller, RandomSource};
use crate::focus::{ResolvedFocusRoll, resolve_focus_roll};
use crate::stress::stress_check_for_bad_things;
use crate::value::calculate_value;

/// A request to roll a pool and keep the highest dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Number of d10s to roll.
    pub count: usize,
    /// Number of highest dice to keep.
    pub keep: i32,
    /// Modifier codes for this roll.
    pub attributes: Attributes,
}

impl RollRequest {
    /// Create a request from raw command values.
    ///
    /// A negative die count rolls no dice.
    pub fn new(count: i32, keep: i32, attributes: &str) -> Self {
        Self {
            count: usize::try_from(count).unwrap_or(0),
            keep,
            attributes: Attributes::parse(attributes),
        }
    }

    /// Whether dice explode for this request.
    pub fn explodes(&self) -> bool {
        self.keep > 0
    }
}

/// Everything produced by one roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The final value of the roll.
    pub value: i64,
    /// Rolls as first drawn, before phenomenal rerolls.
    pub base_rolls: Vec<u32>,
    /// Rolls after phenomenal rerolls, with reroll bookkeeping.
    pub focus: ResolvedFocusRoll,
    /// Whether stress brought bad things.
    pub bad_things: bool,
}

impl RollOutcome {
    /// The final rolls in roll order.
    pub fn rolls(&self) -> &[u32] {
        &self.focus.rolls
    }

    /// The final rolls, highest first.
    pub fn sorted_descending(&self) -> Vec<u32> {
        let mut sorted = self.focus.rolls.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Whether any phenomenal rerolls happened.
    pub fn is_phenomenal(&self) -> bool {
        self.focus.phenomenality > 0
    }
}

/// Roll and score a request.
pub fn perform_roll<R: RandomSource>(
    request: &RollRequest,
    roller: &mut DieRoller<R>,
) -> RollOutcome {
    let base_rolls = roller.roll_dice(request.count, request.explodes());
    let focus = resolve_focus_roll(&base_rolls, &request.attributes, roller);
    let bad_things = stress_check_for_bad_things(&focus.rolls, request.keep, &request.attributes);
    let attributes = request.attributes.amplified(focus.phenomenality);
    let value = calculate_value(&focus.rolls, request.keep, &attributes);

    tracing::debug!(
        count = request.count,
        keep = request.keep,
        value,
        phenomenality = focus.phenomenality,
        bad_things,
        "roll resolved"
    );

    RollOutcome {
        value,
        base_rolls,
        focus,
        bad_things,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceSource;

    fn roll(draws: &[u32], count: i32, keep: i32, attrs: &str) -> RollOutcome {
        let mut roller = DieRoller::new(SequenceSource::new(draws.to_vec()));
        perform_roll(&RollRequest::new(count, keep, attrs), &mut roller)
    }

    #[test]
    fn plain_roll() {
        let outcome = roll(&[3, 8, 5], 3, 2, "");
        assert_eq!(outcome.base_rolls, vec![3, 8, 5]);
        assert_eq!(outcome.rolls(), &[3, 8, 5]);
        assert_eq!(outcome.sorted_descending(), vec![8, 5, 3]);
        assert_eq!(outcome.value, 13);
        assert!(!outcome.is_phenomenal());
        assert!(!outcome.bad_things);
    }

    #[test]
    fn explodes_when_keeping() {
        let outcome = roll(&[10, 4, 6], 2, 1, "");
        assert_eq!(outcome.base_rolls, vec![14, 6]);
        assert_eq!(outcome.value, 14);
    }

    #[test]
    fn no_explosion_without_keep() {
        let outcome = roll(&[10, 4], 2, 0, "");
        assert_eq!(outcome.base_rolls, vec![10, 4]);
        assert_eq!(outcome.value, 0);
    }

    #[test]
    fn negative_count_rolls_nothing() {
        let outcome = roll(&[7], -3, 2, "+");
        assert!(outcome.base_rolls.is_empty());
        assert_eq!(outcome.value, 4);
    }

    #[test]
    fn phenomena_amplify_attributes() {
        // Draws: pool 2, 6; reroll of the 2 draws 9.
        let outcome = roll(&[2, 6, 9], 2, 2, "f+");
        assert_eq!(outcome.base_rolls, vec![2, 6]);
        assert_eq!(outcome.rolls(), &[9, 6]);
        assert_eq!(outcome.focus.phenomenality, 1);
        assert!(outcome.is_phenomenal());
        // 15 + 4 * 2
        assert_eq!(outcome.value, 23);
    }

    #[test]
    fn stress_uses_adjusted_rolls() {
        // The 2 is rerolled into a 1, making two ones out of three dice.
        let outcome = roll(&[1, 2, 8, 1], 3, 1, "fs");
        assert_eq!(outcome.rolls(), &[1, 1, 8]);
        assert!(outcome.bad_things);
    }

    #[test]
    fn outcome_serializes() {
        let outcome = roll(&[4, 5], 2, 1, "x");
        let json = serde_json::to_value(&outcome).unwrap_or_default();
        assert_eq!(json["value"], 10);
        assert_eq!(json["focus"]["phenomenality"], 0);
    }
}
