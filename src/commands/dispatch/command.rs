//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use pipenet_core::config::PipenetConfig;
use pipenet_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PipenetConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: PipenetConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pipenet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Minimum pipe network and farthest-latency analysis.");
        println!();
        println!("Run `pipenet --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Analyze {
                input,
                source,
                mst_out,
                precision,
            } => commands::analyze::execute(
                ctx,
                input,
                source.as_deref(),
                mst_out.as_deref(),
                *precision,
            )?,
            Commands::Mst {
                input,
                mst_out,
                precision,
            } => commands::mst::execute(ctx, input, mst_out.as_deref(), *precision)?,
            Commands::Path {
                input,
                target,
                source,
                precision,
            } => commands::path::execute(ctx, input, target, source.as_deref(), *precision)?,
        }

        if ctx.cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        Ok(())
    }
}
