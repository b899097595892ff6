//! Reply texts and roll formatting.

use pd_mechanics::RollOutcome;

use crate::error::BotError;

/// Help text for the `help` command. The `NkM` form is legacy and left out.
pub fn help_text(prefix: &str) -> String {
    format!(
        "Commands: {prefix}roll (aka {prefix}r), {prefix}help

- Use {prefix}r X Y [attributes] to make a normal Past Due roll.
- Use {prefix}r d100 to roll a d100.

Use 'o' for the ⊕ attribute."
    )
}

/// Reply to a roll that breaks the sanity limits.
pub const NAUGHTY: &str = "... Nice try.";

/// Reply to a roll command that could not be parsed.
pub fn bad_roll_command(prefix: &str) -> String {
    format!(
        "Unrecognized roll command syntax.

Reminder: syntax is {prefix}r X Y [attributes] or {prefix}r d100."
    )
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a percentile roll.
pub fn format_d100(value: u32) -> String {
    format!("Rolled d100: {value}")
}

/// Format a pool roll.
///
/// ```text
/// Rolled: 23 (phenomal! 1 twos. twos rerolled per dice: 1, 0)
///
/// (sorted rolls 9, 6
/// | roll order 9, 6
/// | before applying F attribute 2, 6)
/// ```
pub fn format_roll(outcome: &RollOutcome) -> String {
    let mut flags = Vec::new();
    if outcome.is_phenomenal() {
        flags.push(format!(
            "phenomal! {} twos. twos rerolled per dice: {}",
            outcome.focus.phenomenality,
            join(&outcome.focus.reroll_counts)
        ));
    }
    if outcome.bad_things {
        flags.push("stress, bad things!".to_string());
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" ({})", flags.join(" "))
    };

    let mut reply = format!(
        "Rolled: {}{flags}\n\n(sorted rolls {}\n| roll order {}",
        outcome.value,
        join(&outcome.sorted_descending()),
        join(outcome.rolls())
    );
    if outcome.is_phenomenal() {
        reply.push_str(&format!(
            "\n| before applying F attribute {})",
            join(&outcome.base_rolls)
        ));
    } else {
        reply.push(')');
    }
    reply
}

/// The chat reply for an error, with commands shown under `prefix`.
pub fn error_reply(error: &BotError, prefix: &str) -> String {
    match error {
        BotError::UnrecognizedRoll(_)
        | BotError::Mechanics(_)
        | BotError::UnsupportedDie(_) => bad_roll_command(prefix),
        BotError::OutOfBounds { .. } => NAUGHTY.to_string(),
        other => format!("error: {other}"),
    }
}
