use pd_bot::reply::format_roll;
use pd_bot::{Bot, BotConfig};

pub fn run(x: i32, y: i32, attributes: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut bot = Bot::from_config(super::seeded(BotConfig::default(), seed));
    let attributes = attributes.to_lowercase();
    let outcome = bot
        .roll(x.max(y), x.min(y), &attributes)
        .map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("failed to serialize roll: {e}"))?;
        println!("{text}");
    } else {
        println!("{}", format_roll(&outcome));
    }
    Ok(())
}
