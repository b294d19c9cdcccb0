// src/main.rs

//! cheevo-compare server entry point.

use std::path::PathBuf;

use clap::Parser;

use cheevo_compare::error::Result;
use cheevo_compare::models::Config;
use cheevo_compare::server;

/// cheevo-compare - Achievement profile comparison server
#[derive(Parser, Debug)]
#[command(
    name = "cheevo-server",
    version,
    about = "Compares achievement lists between two public profile pages"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the configured listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the server.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    log::info!(
        "Starting with static assets from '{}' on port {}",
        config.server.static_dir,
        config.server.port
    );

    server::run(config).await
}
