//! CLI argument parsing for pipenet
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::InputArgs;
pub use pipenet_core::format::OutputFormat;
use parse::parse_output_format;

/// Pipenet - minimum pipe network and farthest latency from a reservoir
#[derive(Parser, Debug)]
#[command(name = "pipenet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `pipenet_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./pipenet.toml when present)
    #[arg(long, global = true, env = "PIPENET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the MST and report the farthest node from the source
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Label of the source (reservoir) node [default: first node seen]
        #[arg(long)]
        source: Option<String>,

        /// Also write the MST edge list to this CSV file
        #[arg(long)]
        mst_out: Option<PathBuf>,

        /// Decimal places for weights and distances
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Print the minimum spanning tree (or forest)
    Mst {
        #[command(flatten)]
        input: InputArgs,

        /// Also write the MST edge list to this CSV file
        #[arg(long)]
        mst_out: Option<PathBuf>,

        /// Decimal places for weights
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Show the path within the MST from the source to a target node
    Path {
        #[command(flatten)]
        input: InputArgs,

        /// Label of the target node
        #[arg(long)]
        target: String,

        /// Label of the source (reservoir) node [default: first node seen]
        #[arg(long)]
        source: Option<String>,

        /// Decimal places for distances
        #[arg(long)]
        precision: Option<usize>,
    },
}
