//! Craps Console - interactive game of craps.

use anyhow::{Context, Result};
use clap::Parser;
use craps_console::{Cli, Console};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_craps::Dice;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rng = match cli.seed {
        Some(seed) => {
            info!(seed, "Seeding dice");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_os_rng(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), Dice::new(rng));

    console.run(cli.games).context("Craps session failed")?;
    Ok(())
}
