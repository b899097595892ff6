//! Attribute modifier strings.
//!
//! A roll carries a short string of single-character codes. Repeats
//! count, unknown characters are ignored, and no case folding happens
//! here: callers lower-case the command first.
//!
//! | Code | Meaning |
//! |------|---------|
//! | `+`  | +4 to the kept sum |
//! | `-`  | -4 to the kept sum |
//! | `o`  | cancels one `-` |
//! | `x`  | doubles the result per net step |
//! | `/`  | divides the result by 3 per net step |
//! | `f`  | focus roll: twos are rerolled as phenomena |
//! | `s`  | stressed roll: too many ones means bad things |

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The parsed multiset of modifier codes for one roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Count of `+` codes.
    pub plus: u32,
    /// Count of `-` codes.
    pub minus: u32,
    /// Count of `o` codes.
    pub cancel: u32,
    /// Count of `x` codes.
    pub times: u32,
    /// Count of `/` codes.
    pub divide: u32,
    /// Whether `f` is present.
    pub focus: bool,
    /// Whether `s` is present.
    pub stress: bool,
}

impl Attributes {
    /// Count the modifier codes in `s`.
    pub fn parse(s: &str) -> Self {
        s.chars().fold(Self::default(), |mut attrs, c| {
            match c {
                '+' => attrs.plus += 1,
                '-' => attrs.minus += 1,
                'o' => attrs.cancel += 1,
                'x' => attrs.times += 1,
                '/' => attrs.divide += 1,
                'f' => attrs.focus = true,
                's' => attrs.stress = true,
                _ => {}
            }
            attrs
        })
    }

    /// Penalties left after `o` cancels, never below zero.
    pub fn effective_negatives(&self) -> u32 {
        self.minus.saturating_sub(self.cancel)
    }

    /// The flat modifier added to the kept sum.
    pub fn additive_modifier(&self) -> i64 {
        4 * (i64::from(self.plus) - i64::from(self.effective_negatives()))
    }

    /// Net multiplier steps: positive multiplies, negative divides.
    pub fn mul_offset(&self) -> i64 {
        i64::from(self.times) - i64::from(self.divide)
    }

    /// Scale every count by `2^phenomenality`.
    ///
    /// Each phenomenon doubles the whole attribute string, so a `+` on a
    /// roll with two phenomena is worth four `+`. Flags stay as they are.
    pub fn amplified(&self, phenomenality: u32) -> Self {
        let factor = 1u32.checked_shl(phenomenality).unwrap_or(u32::MAX);
        Self {
            plus: self.plus.saturating_mul(factor),
            minus: self.minus.saturating_mul(factor),
            cancel: self.cancel.saturating_mul(factor),
            times: self.times.saturating_mul(factor),
            divide: self.divide.saturating_mul(factor),
            ..*self
        }
    }
}

impl FromStr for Attributes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
