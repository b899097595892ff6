//! The stress check for bad things.

use crate::attributes::Attributes;

/// Minimum number of ones for a stressed roll to go badly.
///
/// Half the pool rounded up, or the keep count if that is larger.
pub fn ones_for_stress(roll_count: usize, keep: i32) -> i64 {
    let half = i64::try_from(roll_count.div_ceil(2)).unwrap_or(i64::MAX);
    half.max(i64::from(keep))
}

/// Check whether bad things happen due to stress.
///
/// Always false without the `s` attribute.
pub fn stress_check_for_bad_things(rolls: &[u32], keep: i32, attributes: &Attributes) -> bool {
    if !attributes.stress {
        return false;
    }
    let ones = rolls.iter().filter(|&&r| r == 1).count();
    let ones = i64::try_from(ones).unwrap_or(i64::MAX);
    ones >= ones_for_stress(rolls.len(), keep)
}
