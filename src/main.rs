use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    let address = args.address.unwrap_or(config.web_address);
    let port = args.port.unwrap_or(config.web_port);

    log::info!("Starting PassForge - Secure Password Generation Service");
    api::start_server(&address, port).await?;

    log::info!("PassForge shutdown complete");
    Ok(())
}
