//! Dice-resolution engine for the Past Due tabletop RPG.
//!
//! Rolls exploding d10 pools and percentile dice, reads the compact
//! attribute modifier strings (`+ - o x / f s`), and scores a roll:
//! keep-highest summation, additive and multiplicative modifiers, the
//! stress "bad things" check, and phenomenal focus rerolls.
//!
//! All randomness flows through [`RandomSource`], so a seeded or scripted
//! source makes every roll reproducible.

pub mod attributes;
pub mod check;
pub mod dice;
pub mod error;
pub mod focus;
pub mod stress;
pub mod value;

pub use attributes::Attributes;
pub use check::{RollOutcome, RollRequest, perform_roll};
pub use dice::{Die, DieRoller, RandomSource, SequenceSource};
pub use error::{MechError, MechResult};
pub use focus::{ResolvedFocusRoll, resolve_focus_roll};
pub use stress::stress_check_for_bad_things;
pub use value::calculate_value;
