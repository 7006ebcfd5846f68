//! Waiter - terminal order entry

mod commands;
mod config;
mod item_spec;
mod logger;
mod render;

use anyhow::Context;
use clap::Parser;

use crate::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(cli.log_level.as_deref(), cli.log_dir.as_deref());

    let config = cli.client_config();
    tracing::debug!(api_url = %config.base_url, "Starting");
    let api = config.build_api().context("Failed to build HTTP client")?;

    commands::run(cli.command, api).await
}
