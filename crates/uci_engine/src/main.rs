mod config;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;
use crate::session::UciSession;

/// UCI front end for the classical chess engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u8>,

    /// Seed for reproducible move choices (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    }
    .with_overrides(cli.depth, cli.seed);

    init_logging(&config.log_filter);
    let mut session = UciSession::new(&config);
    info!(depth = session.depth(), seed = ?config.seed, "engine starting");

    // UCI engines communicate via stdin/stdout; logs go to stderr.
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

/// RUST_LOG wins; otherwise the configured filter, falling back to `info`.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
