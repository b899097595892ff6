//! Chat command parsing.
//!
//! Supported forms (with the default `!` prefix):
//! - `!help`
//! - `!r X Y [attributes]`: roll the larger of X and Y, keep the smaller
//! - `!r NkM [attributes]`: legacy form, roll N keep M
//! - `!r d100`
//!
//! `!roll` works anywhere `!r` does.

use pd_mechanics::Die;

use crate::error::{BotError, BotResult};

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the help text.
    Help,
    /// Roll a pool of d10s.
    Roll {
        /// Number of dice.
        count: i32,
        /// Number of highest dice to keep.
        keep: i32,
        /// Raw attribute string, lower-cased.
        attributes: String,
    },
    /// Roll a percentile die.
    D100,
}

/// Parse a chat message.
///
/// Returns `Ok(None)` for messages that are not addressed to the bot.
pub fn parse_command(message: &str, prefix: &str) -> BotResult<Option<Command>> {
    let Some(rest) = message.strip_prefix(prefix) else {
        return Ok(None);
    };
    if rest.starts_with("help") {
        return Ok(Some(Command::Help));
    }
    if rest.starts_with('r') {
        return parse_roll(message).map(Some);
    }
    Ok(None)
}

fn parse_roll(message: &str) -> BotResult<Command> {
    let lower = message.trim().to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();
    let unrecognized = || BotError::UnrecognizedRoll(message.trim().to_string());

    let Some(&expr) = parts.get(1) else {
        return Err(unrecognized());
    };

    if let [x, y, rest @ ..] = &parts[1..] {
        if let (Ok(x), Ok(y), true) = (x.parse::<i32>(), y.parse::<i32>(), rest.len() <= 1) {
            return Ok(Command::Roll {
                count: x.max(y),
                keep: x.min(y),
                attributes: rest.first().copied().unwrap_or("").to_string(),
            });
        }
    }

    if expr.starts_with('d') && parts.len() == 2 {
        return match Die::from_str_tag(expr)? {
            Die::D100 => Ok(Command::D100),
            die => Err(BotError::UnsupportedDie(die)),
        };
    }

    if let Some((count, keep)) = expr.split_once('k') {
        if parts.len() > 3 {
            return Err(unrecognized());
        }
        let count = count.parse().map_err(|_| unrecognized())?;
        let keep = keep.parse().map_err(|_| unrecognized())?;
        return Ok(Command::Roll {
            count,
            keep,
            attributes: parts.get(2).copied().unwrap_or("").to_string(),
        });
    }

    Err(unrecognized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_mechanics::MechError;

    fn parse(message: &str) -> BotResult<Option<Command>> {
        parse_command(message, "!")
    }

    fn roll(count: i32, keep: i32, attributes: &str) -> Option<Command> {
        Some(Command::Roll {
            count,
            keep,
            attributes: attributes.to_string(),
        })
    }

    #[test]
    fn ignores_chatter() {
        assert_eq!(parse("hello there").unwrap(), None);
        assert_eq!(parse("r 6 3").unwrap(), None);
        assert_eq!(parse("!dance").unwrap(), None);
    }

    #[test]
    fn help() {
        assert_eq!(parse("!help").unwrap(), Some(Command::Help));
    }

    #[test]
    fn roll_keep_pair() {
        assert_eq!(parse("!r 6 3 +f").unwrap(), roll(6, 3, "+f"));
        assert_eq!(parse("!roll 3 6 x").unwrap(), roll(6, 3, "x"));
        assert_eq!(parse("!r 4 2").unwrap(), roll(4, 2, ""));
    }

    #[test]
    fn attributes_are_lowercased() {
        assert_eq!(parse("!r 6 3 FS").unwrap(), roll(6, 3, "fs"));
    }

    #[test]
    fn legacy_keep_form() {
        assert_eq!(parse("!r 6k2").unwrap(), roll(6, 2, ""));
        assert_eq!(parse("!r 6K2 -o").unwrap(), roll(6, 2, "-o"));
        assert_eq!(parse("!r -2k-1").unwrap(), roll(-2, -1, ""));
    }

    #[test]
    fn percentile() {
        assert_eq!(parse("!r d100").unwrap(), Some(Command::D100));
        assert_eq!(parse("!roll D100").unwrap(), Some(Command::D100));
    }

    #[test]
    fn unrecognized_rolls() {
        for message in [
            "!r",
            "!r 6kx",
            "!r 6k2k1",
            "!r six 3 +",
            "!r 6 3 + extra",
            "!r 6k2 + extra",
            "!r d100 junk",
        ] {
            assert!(
                matches!(parse(message), Err(BotError::UnrecognizedRoll(_))),
                "{message}"
            );
        }
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(parse_command("?r 5 2", "?").unwrap(), roll(5, 2, ""));
        assert_eq!(parse_command("!r 5 2", "?").unwrap(), None);
    }

    #[test]
    fn unknown_die() {
        assert!(matches!(
            parse("!r d20"),
            Err(BotError::Mechanics(MechError::UnknownDie(tag))) if tag == "d20"
        ));
    }

    #[test]
    fn single_d10_is_unsupported() {
        assert!(matches!(
            parse("!r d10"),
            Err(BotError::UnsupportedDie(Die::D10))
        ));
    }
}
