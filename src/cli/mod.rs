//! The magicgen command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. The default invocation (no subcommand) runs
//! the full generate pipeline: parse the embedded table, validate it, and
//! print one test declaration per data row to stdout.

use std::process;

use clap::Parser;

use crate::cli::args::{Command, MagicArgs};
use crate::emit::{self, StdoutSink};
use crate::errors::SourceContext;
use crate::parser::{self, Entry};
use crate::{table, validation};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = MagicArgs::parse();

    match args.command.unwrap_or(Command::Generate) {
        Command::Generate => generate(),
        Command::Entries { json } => entries(json),
        Command::Check => check(),
    }
}

/// Parses the embedded table, exiting with a diagnostic on failure.
fn parse_embedded_or_exit(context: &SourceContext) -> Vec<Entry> {
    parser::parse(table::MAGIC_TABLE, context).unwrap_or_else(|e| {
        output::print_error(e);
        process::exit(1);
    })
}

fn generate() {
    let context = SourceContext::embedded();
    let entries = parse_embedded_or_exit(&context);

    let findings = validation::validate(&entries, &context);
    if !findings.is_empty() {
        for finding in findings {
            output::print_error(finding);
        }
        process::exit(1);
    }

    emit::emit_entries(&entries, &mut StdoutSink);
}

fn entries(json: bool) {
    let context = SourceContext::embedded();
    let entries = parse_embedded_or_exit(&context);

    if json {
        let rendered = serde_json::to_string_pretty(&entries).unwrap_or_else(|e| {
            eprintln!("Error rendering entries as JSON: {}", e);
            process::exit(1);
        });
        println!("{}", rendered);
    } else {
        output::print_entries(&entries);
    }
}

fn check() {
    let context = SourceContext::embedded();
    let entries = parse_embedded_or_exit(&context);

    let findings = validation::validate(&entries, &context);
    let finding_count = findings.len();
    for finding in findings {
        output::print_error(finding);
    }
    output::print_check_summary(entries.len(), finding_count);
    if finding_count > 0 {
        process::exit(1);
    }
}
