// src/main.rs — athenagen entry point

use clap::Parser;

use athenagen::cli::{create, Cli};
use athenagen::infra::config::Config;
use athenagen::infra::logger;

fn main() {
    // Initialize logging (respects ATHENAGEN_LOG / RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };

    tracing::debug!("athenagen starting");

    create::run_create(&cli, &config)
}
