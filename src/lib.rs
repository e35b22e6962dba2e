pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod services;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::TrackerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_track(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    let runtime = build_runtime()?;
    runtime.block_on(async {
        let service = TrackerService::new(config)?;
        let stdout = std::io::stdout().lock();
        service
            .run(&cli.member_id, cli.page(), stdout)
            .await
            .map(|_outcome| ())
    })
}

/// Single-threaded: the one request blocks the process until it finishes.
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")
}

fn build_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::new().with_base_url(cli.api_url.as_str());
    if cli.no_color || !std::io::stdout().is_terminal() {
        config.without_color()
    } else {
        config
    }
}
