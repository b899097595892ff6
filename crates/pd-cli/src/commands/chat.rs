//! Line-oriented chat loop: each stdin line is one chat message.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use colored::Colorize;

use pd_bot::{Bot, BotConfig};

pub fn run(config: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let config = match config {
        Some(path) => BotConfig::load(path).map_err(|e| e.to_string())?,
        None => BotConfig::default(),
    };
    let mut bot = Bot::from_config(super::seeded(config, seed));

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!(
            "  {} {}",
            "Past Due".bold(),
            format!("(type {}help, Ctrl-D to quit)", bot.config().prefix).dimmed()
        );
    }

    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        if let Some(reply) = bot.reply(line.trim()) {
            writeln!(stdout, "{reply}").map_err(|e| format!("failed to write reply: {e}"))?;
            stdout
                .flush()
                .map_err(|e| format!("failed to write reply: {e}"))?;
        }
    }
    Ok(())
}
