use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menagerie::{
    config::GameConfig,
    game::Game,
    rng::ChaChaSource,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Turn-based zoo tycoon for the console")]
struct Cli {
    /// Path to an optional YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random number generator (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_yaml(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => GameConfig::default(),
    };
    init_tracing(&config.logging.level);

    let rng = match cli.seed.or(config.seed) {
        Some(seed) => ChaChaSource::seeded(seed),
        None => ChaChaSource::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let game = Game::new(stdin.lock(), stdout.lock(), rng, config.starting_bank);
    game.run().context("running the game session")?;
    Ok(())
}

/// Logs go to stderr so stdout stays a clean game transcript. `RUST_LOG`
/// overrides the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
