//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Mock users API - In-memory user list with simulated latency
#[derive(Parser, Debug)]
#[command(name = "mock-users")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settle every request immediately
    #[arg(long, global = true, env = "MOCK_INSTANT")]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the create / update / delete walkthrough
    Demo,

    /// Start an interactive list view
    Shell,

    /// Print all users as JSON
    Users,

    /// Print the story listing as JSON
    Stories,
}
