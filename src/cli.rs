//! CLI argument definitions.
//!
//! Basecamp has no subcommands: running it executes the setup routine.

use clap::Parser;
use std::path::PathBuf;

/// Basecamp - Python development environment bootstrap.
#[derive(Debug, Parser)]
#[command(name = "basecamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
