//! Defines the command-line arguments and subcommands for the magicgen CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "magicgen",
    version,
    about = "Generates test stubs for Twilio's documented magic test phone numbers."
)]
pub struct MagicArgs {
    /// Runs `generate` when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse the embedded table and print one test declaration per row.
    Generate,
    /// List the parsed table entries without generating code.
    Entries {
        /// Emit the entries as pretty-printed JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Run the semantic checks over the embedded table and report findings.
    Check,
}
