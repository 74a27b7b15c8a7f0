//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the interactive weather screen
//! - Human-friendly output formatting

use clap::Parser;

mod autocomplete;
mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env may carry OPENWEATHER_API_KEY.
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
