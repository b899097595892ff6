//! The chat bot: one message in, one reply out.

use rand::SeedableRng;
use rand::rngs::StdRng;

use pd_mechanics::{DieRoller, RandomSource, RollOutcome, RollRequest, perform_roll};

use crate::command::{Command, parse_command};
use crate::config::BotConfig;
use crate::error::BotResult;
use crate::reply::{error_reply, format_d100, format_roll, help_text};

/// A Past Due dice bot.
pub struct Bot<R> {
    config: BotConfig,
    roller: DieRoller<R>,
}

impl Bot<StdRng> {
    /// Create a bot seeded from the config, or from the OS if unseeded.
    pub fn from_config(config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, rng)
    }
}

impl<R: RandomSource> Bot<R> {
    /// Create a bot drawing dice from `source`.
    pub fn new(config: BotConfig, source: R) -> Self {
        Self {
            config,
            roller: DieRoller::new(source),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Roll a pool after checking the sanity limits.
    pub fn roll(&mut self, count: i32, keep: i32, attributes: &str) -> BotResult<RollOutcome> {
        self.config.limits.check(count, keep, attributes)?;
        let request = RollRequest::new(count, keep, attributes);
        Ok(perform_roll(&request, &mut self.roller))
    }

    /// Roll a percentile die.
    pub fn roll_d100(&mut self) -> u32 {
        self.roller.roll_d100()
    }

    /// Run a parsed command and format the reply.
    pub fn execute(&mut self, command: &Command) -> BotResult<String> {
        match command {
            Command::Help => Ok(help_text(&self.config.prefix)),
            Command::D100 => Ok(format_d100(self.roll_d100())),
            Command::Roll {
                count,
                keep,
                attributes,
            } => {
                let outcome = self.roll(*count, *keep, attributes)?;
                Ok(format_roll(&outcome))
            }
        }
    }

    /// Handle a message. `Ok(None)` means it was not a command.
    pub fn process(&mut self, message: &str) -> BotResult<Option<String>> {
        let Some(command) = parse_command(message, &self.config.prefix)? else {
            return Ok(None);
        };
        tracing::info!(message, ?command, "got command");
        self.execute(&command).map(Some)
    }

    /// Handle a message, turning errors into their chat replies.
    pub fn reply(&mut self, message: &str) -> Option<String> {
        match self.process(message) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(message, error = %e, "command rejected");
                Some(error_reply(&e, &self.config.prefix))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BotError;
    use crate::reply::{NAUGHTY, bad_roll_command};
    use pd_mechanics::SequenceSource;

    fn bot(draws: &[u32]) -> Bot<SequenceSource> {
        Bot::new(BotConfig::default(), SequenceSource::new(draws.to_vec()))
    }

    #[test]
    fn ignores_non_commands() {
        assert_eq!(bot(&[]).reply("just chatting"), None);
    }

    #[test]
    fn help() {
        assert_eq!(bot(&[]).reply("!help"), Some(help_text("!")));
    }

    #[test]
    fn roll_reply() {
        let reply = bot(&[3, 8, 5]).reply("!r 3 2");
        assert_eq!(
            reply.as_deref(),
            Some("Rolled: 13\n\n(sorted rolls 8, 5, 3\n| roll order 3, 8, 5)")
        );
    }

    #[test]
    fn focus_roll_reply() {
        let reply = bot(&[2, 6, 9]).reply("!r 2 2 f+").unwrap_or_default();
        assert!(reply.starts_with("Rolled: 23 (phenomal! 1 twos."));
        assert!(reply.ends_with("| before applying F attribute 2, 6)"));
    }

    #[test]
    fn d100_reply() {
        assert_eq!(bot(&[77]).reply("!r d100").as_deref(), Some("Rolled d100: 77"));
    }

    #[test]
    fn out_of_bounds_is_naughty() {
        assert_eq!(bot(&[]).reply("!r 50 2").as_deref(), Some(NAUGHTY));
        assert_eq!(
            bot(&[]).reply("!r 6 2 ++++++++++++++++++++").as_deref(),
            Some(NAUGHTY)
        );
    }

    #[test]
    fn bad_syntax() {
        assert_eq!(bot(&[]).reply("!r nonsense"), Some(bad_roll_command("!")));
    }

    #[test]
    fn roll_checks_limits() {
        assert!(matches!(
            bot(&[]).roll(4, 12, ""),
            Err(BotError::OutOfBounds { keep: 12, .. })
        ));
    }

    #[test]
    fn seeded_bots_agree() {
        let config = BotConfig::default().with_seed(1234);
        let mut a = Bot::from_config(config.clone());
        let mut b = Bot::from_config(config);
        assert_eq!(a.reply("!r 8 3 fs"), b.reply("!r 8 3 fs"));
    }

    #[test]
    fn unknown_die_gets_syntax_reminder() {
        assert_eq!(bot(&[]).reply("!r d10"), Some(bad_roll_command("!")));
        assert_eq!(bot(&[]).reply("!r d20"), Some(bad_roll_command("!")));
    }

    #[test]
    fn replies_use_configured_prefix() {
        let config = BotConfig {
            prefix: "?".to_string(),
            ..BotConfig::default()
        };
        let mut bot = Bot::new(config, SequenceSource::default());
        let help = bot.reply("?help").unwrap_or_default();
        assert!(help.contains("Use ?r X Y [attributes]"));
        assert_eq!(bot.reply("?r junk"), Some(bad_roll_command("?")));
    }
}
