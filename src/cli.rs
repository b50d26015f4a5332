//! Command-line surface of the operator terminal, built on clap.
//!
//! Defines the [`Cli`] struct with the [`Command`] subcommands (login,
//! status, demo) and global flags (--machine, --verbose).

use clap::{Parser, Subcommand};

/// opstation, the operator terminal for a small manufacturing floor.
#[derive(Debug, Parser)]
#[command(name = "opstation", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Machine to bind the terminal to for this invocation.
    #[arg(long, global = true)]
    pub machine: Option<String>,

    /// Enable verbose output.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate an operator with a 4-digit PIN.
    Login {
        /// The PIN to try.
        pin: String,
    },

    /// Show the machines and their active jobs.
    Status,

    /// Run the built-in operator-session demonstration.
    Demo,
}
