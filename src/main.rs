// ABOUTME: Entry point for the leadscope binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and dispatches the selected command.

mod cli;
mod render;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadscope=info".parse().unwrap()),
        )
        .init();

    let args = cli::Cli::parse();
    cli::run(args).await
}
