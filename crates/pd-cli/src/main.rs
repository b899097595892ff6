//! CLI frontend for the Past Due dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pd",
    about = "Past Due dice roller",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the larger of X and Y d10s and keep the smaller number
    Roll {
        /// First number (dice or keep)
        #[arg(allow_negative_numbers = true)]
        x: i32,

        /// Second number (dice or keep)
        #[arg(allow_negative_numbers = true)]
        y: i32,

        /// Attribute codes, e.g. "+f" or "xs"
        #[arg(default_value = "")]
        attributes: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the full roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a percentile die
    D100 {
        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Read chat commands (e.g. `!r 6 3 +f`) from stdin and print replies
    Chat {
        /// JSON bot config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            x,
            y,
            attributes,
            seed,
            json,
        } => commands::roll::run(x, y, &attributes, seed, json),
        Commands::D100 { seed } => commands::d100::run(seed),
        Commands::Chat { config, seed } => commands::chat::run(config.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
