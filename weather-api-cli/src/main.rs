//! Binary crate for the `weather_api` tool.
//!
//! This crate focuses on:
//! - Reading the tool envelope from stdin
//! - Writing exactly one JSON line to stdout
//! - Logging to stderr

use clap::Parser;
use tracing::Dispatch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cmd.log_filter()));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    cmd.run(Dispatch::new(subscriber)).await
}
