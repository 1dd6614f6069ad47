use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Player;
use connect_four::logging;
use connect_four::ui::{terminal, App};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four in the terminal")]
#[command(version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Marker that moves first (X or O)
    #[arg(long)]
    first: Option<Player>,

    /// Disable mouse input
    #[arg(long)]
    no_mouse: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init(path, &cli.log_level).context("setting up logging")?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    run(&config).context("running terminal UI")
}

fn run(config: &AppConfig) -> io::Result<()> {
    let mut tui = terminal::init(config.ui.mouse)?;

    // Create app and run
    let mut app = App::with_config(config);
    let res = app.run(&mut tui);

    // Restore terminal, even on error
    terminal::restore(config.ui.mouse);

    if let Err(err) = &res {
        tracing::error!(%err, "terminal UI failed");
    }
    res
}
