//! Rolling single dice and pools.

use super::{Die, RandomSource};

/// Rolls Past Due dice from an owned [`RandomSource`].
#[derive(Debug, Clone)]
pub struct DieRoller<R> {
    source: R,
}

impl<R: RandomSource> DieRoller<R> {
    /// Create a roller drawing from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Roll a single percentile die.
    pub fn roll_d100(&mut self) -> u32 {
        self.source.next_in_range(1, Die::D100.sides())
    }

    /// Roll one d10, exploding on a 10 when `explodes` is set.
    ///
    /// An exploding die keeps rolling and adding while it shows a 10, so
    /// the result is `10 * k + r` with `k` explosions and `1 <= r <= 10`.
    pub fn roll_die(&mut self, explodes: bool) -> u32 {
        let sides = Die::D10.sides();
        let mut roll = self.source.next_in_range(1, sides);
        let mut total = roll;
        if explodes {
            while roll == sides {
                roll = self.source.next_in_range(1, sides);
                total += roll;
                tracing::debug!(roll, total, "die exploded");
            }
        }
        total
    }

    /// Roll `count` d10s in draw order.
    pub fn roll_dice(&mut self, count: usize, explodes: bool) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(explodes)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::SequenceSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn non_exploding_ten_stays_ten() {
        let mut roller = DieRoller::new(SequenceSource::new([10, 4]));
        assert_eq!(roller.roll_die(false), 10);
        assert_eq!(roller.source().draws(), 1);
    }

    #[test]
    fn exploding_chain_adds_up() {
        let mut roller = DieRoller::new(SequenceSource::new([10, 10, 3]));
        assert_eq!(roller.roll_die(true), 23);
        assert_eq!(roller.source().draws(), 3);
    }

    #[test]
    fn roll_dice_keeps_draw_order() {
        let mut roller = DieRoller::new(SequenceSource::new([5, 10, 2, 9]));
        assert_eq!(roller.roll_dice(3, true), vec![5, 12, 9]);
    }

    #[test]
    fn zero_dice_is_empty() {
        let mut roller = DieRoller::new(SequenceSource::new([7]));
        assert!(roller.roll_dice(0, true).is_empty());
        assert_eq!(roller.source().draws(), 0);
    }

    #[test]
    fn d100_in_range() {
        let mut roller = DieRoller::new(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            assert!((1..=100).contains(&roller.roll_d100()));
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = DieRoller::new(StdRng::seed_from_u64(99));
        let mut b = DieRoller::new(StdRng::seed_from_u64(99));
        assert_eq!(a.roll_dice(10, true), b.roll_dice(10, true));
    }
}
