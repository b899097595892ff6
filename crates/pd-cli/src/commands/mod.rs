pub mod chat;
pub mod d100;
pub mod roll;

use pd_bot::BotConfig;

/// Apply a `--seed` flag on top of a config.
fn seeded(config: BotConfig, seed: Option<u64>) -> BotConfig {
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}
