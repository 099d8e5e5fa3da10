//! Command dispatch logic for pipenet

use std::time::Instant;

use crate::cli::Cli;
use pipenet_core::config::PipenetConfig;
use pipenet_core::error::Result;
use tracing::debug;

pub mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = PipenetConfig::resolve(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
