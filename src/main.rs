//! newsroom-search CLI entry point

use clap::Parser;
use newsroom_search::cli::{Cli, Commands};
use newsroom_search::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("NEWSROOM_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Enhance(args) => newsroom_search::cli::enhance::run(args).await,
        Commands::Search(args) => newsroom_search::cli::search::run(args).await,
    }
}
