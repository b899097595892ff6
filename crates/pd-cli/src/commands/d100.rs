use pd_bot::reply::format_d100;
use pd_bot::{Bot, BotConfig};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut bot = Bot::from_config(super::seeded(BotConfig::default(), seed));
    println!("{}", format_d100(bot.roll_d100()));
    Ok(())
}
