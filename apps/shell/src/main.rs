#![allow(clippy::print_stdout)]

mod args;
mod commands;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use nestly_kernel::config::load_app_config;
use nestly_logger::Logger;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let Cli { global, command } = Cli::parse();

    let mut config =
        load_app_config(global.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &global.log_level {
        config.logging.level.clone_from(level);
    }

    let _logger = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;
    tracing::debug!(command = ?command, "Starting");

    commands::run(command, &global, &config).await
}
