//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for rendering miette reports, the entry
//! listing, and the check summary. Centralizing output logic here keeps the
//! command handlers in `cli::run` free of formatting concerns.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::MagicError;
use crate::parser::Entry;

/// Prints a rich miette report for an error to stderr.
pub fn print_error(error: MagicError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

/// Prints the parsed entries as an aligned table.
pub fn print_entries(entries: &[Entry]) {
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            [
                format!("test_{}", entry.index),
                entry.section.to_string(),
                entry.number.to_string(),
                entry.expected.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    for (row, entry) in rows.iter().zip(entries) {
        println!(
            "{:w0$}  {:w1$}  {:w2$}  {:w3$}  {}",
            row[0],
            row[1],
            row[2],
            row[3],
            entry.description,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    }
}

/// Prints the check outcome, green for a clean table and red otherwise.
pub fn print_check_summary(entry_count: usize, finding_count: usize) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut spec = ColorSpec::new();
    if finding_count == 0 {
        spec.set_fg(Some(Color::Green));
        let _ = stdout.set_color(&spec);
        let _ = writeln!(stdout, "table OK: {} entries, no findings", entry_count);
    } else {
        spec.set_fg(Some(Color::Red)).set_bold(true);
        let _ = stdout.set_color(&spec);
        let _ = writeln!(
            stdout,
            "table check failed: {} finding(s) across {} entries",
            finding_count, entry_count
        );
    }
    let _ = stdout.reset();
}
