use anyhow::Context;
use clap::Parser;

use slidedeck::cli::Cli;
use slidedeck::config::Config;
use slidedeck::deck::Deck;
use slidedeck::logging::init_tracing;
use slidedeck::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let deck = Deck::load(&cli.deck).context("Failed to load deck")?;

    runtime::run(&deck, &config, cli.run_options(config.timer.autostart))
        .context("Presentation terminated with an error")?;
    Ok(())
}
