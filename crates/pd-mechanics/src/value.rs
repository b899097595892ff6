//! Keep-highest scoring with attribute modifiers.

use crate::attributes::Attributes;

/// Sum of the `keep` highest rolls.
///
/// A non-positive `keep` keeps nothing; a `keep` past the pool size keeps
/// everything.
pub fn kept_sum(rolls: &[u32], keep: i32) -> i64 {
    let Ok(keep) = usize::try_from(keep) else {
        return 0;
    };
    let mut sorted = rolls.to_vec();
    sorted.sort_unstable();
    let start = sorted.len().saturating_sub(keep);
    sorted[start..].iter().map(|&r| i64::from(r)).sum()
}

/// Compute the final value of a roll.
///
/// The kept sum gets `4` per net `+`, then the multiplier: each net `x`
/// step multiplies by 2 (so `xx` is ×4, not ×8) and each net `/` step
/// divides by 3, rounding toward negative infinity. Multiplication
/// saturates at the `i64` bounds.
pub fn calculate_value(rolls: &[u32], keep: i32, attributes: &Attributes) -> i64 {
    let base = kept_sum(rolls, keep) + attributes.additive_modifier();
    apply_mul(base, attributes.mul_offset())
}

fn apply_mul(base: i64, mul_offset: i64) -> i64 {
    match mul_offset {
        0 => base,
        offset if offset > 0 => base.saturating_mul(2).saturating_mul(offset),
        offset => base.div_euclid(3 * -offset),
    }
}
