//! # gasless
//!
//! Sends ERC-4337 user operations from an EIP-7702 account, paying gas in
//! USDC through a permit paymaster.

#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

mod cli;
mod commands;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = cli::Args::parse();
    let poll = args.poll_options();
    let config = args.config.into_config()?;

    match args.command {
        cli::Command::Balance => commands::balance(&config).await,
        cli::Command::Transfer { amount } => commands::transfer(&config, amount, poll).await,
        cli::Command::Swap { amount_in, approve } => {
            commands::swap(&config, amount_in, approve, poll).await
        }
    }
}
