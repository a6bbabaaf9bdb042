//! Table parser.
//!
//! Converts the raw table text into `Entry` values with source spans. This
//! pass is purely syntactic: it splits rows on whitespace runs, consults only
//! the first and last token of each data row, and leaves semantic checks to
//! the validation pass.
//!
//! Row numbering counts every line seen, including the `To` delimiter and
//! header lines, so emitted indices track the table's line layout (the
//! delimiter and header ordinals are consumed but never emitted). Downstream
//! test names depend on those gaps; do not renumber densely.

use serde::Serialize;

use crate::errors::{ErrorKind, ErrorReporting, MagicError, SourceContext};
use crate::table::{self, Line, Section, Span};

// ============================================================================
// PARSED ENTRIES
// ============================================================================

/// The number column of a data row, normalized for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NumberToken {
    /// The `All Others` catch-all row: any valid number not special-cased.
    AnyValid,
    /// A concrete magic number, emitted as a quoted string literal.
    Literal(String),
}

impl std::fmt::Display for NumberToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberToken::AnyValid => write!(f, "VALID_NUMBER"),
            NumberToken::Literal(number) => write!(f, "\"{}\"", number),
        }
    }
}

/// The code column of a data row, normalized for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpectedCode {
    /// `No error` or `Input-dependent`: the call is expected to succeed.
    NoError,
    /// A concrete API error code.
    Code(u32),
}

impl std::fmt::Display for ExpectedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedCode::NoError => write!(f, "None"),
            ExpectedCode::Code(code) => write!(f, "Some({})", code),
        }
    }
}

/// One data row, parsed and ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// 1-based line ordinal within the table, counting skipped lines.
    pub index: usize,
    pub section: Section,
    pub number: NumberToken,
    pub expected: ExpectedCode,
    /// The middle tokens of the row. Never consulted by emission; surfaced
    /// by the `entries` listing.
    pub description: String,
    pub span: Span,
}

// ============================================================================
// PARSING
// ============================================================================

const DELIMITER_TOKEN: &str = "To";
const HEADER_TOKEN: &str = "Value";
const FALLBACK_TOKEN: &str = "All";
const NO_ERROR_TOKENS: [&str; 2] = ["Input-dependent", "error"];

/// Parse the table text into entries, in source order.
///
/// `context` must wrap the same text as `source`; it anchors diagnostic
/// spans. Fails fast on the first malformed row.
pub fn parse(source: &str, context: &SourceContext) -> Result<Vec<Entry>, MagicError> {
    let lines = table::lines(source);
    if lines.is_empty() {
        return Err(context.report(ErrorKind::EmptyTable, Span::default()));
    }

    let mut entries = Vec::new();
    let mut section = Section::Sender;
    for (ordinal, line) in lines.iter().enumerate() {
        let index = ordinal + 1;
        let tokens: Vec<&str> = line.text.split_whitespace().collect();
        match tokens.first() {
            Some(&DELIMITER_TOKEN) => section = Section::Recipient,
            Some(&HEADER_TOKEN) => {}
            Some(_) => entries.push(parse_row(line, &tokens, index, section, context)?),
            // Interior blank lines still consume an index but carry no row.
            None => {}
        }
    }
    Ok(entries)
}

fn parse_row(
    line: &Line<'_>,
    tokens: &[&str],
    index: usize,
    section: Section,
    context: &SourceContext,
) -> Result<Entry, MagicError> {
    let first = tokens[0];
    let last = tokens[tokens.len() - 1];

    let number = if first == FALLBACK_TOKEN {
        NumberToken::AnyValid
    } else {
        NumberToken::Literal(first.to_string())
    };

    let expected = if NO_ERROR_TOKENS.contains(&last) {
        ExpectedCode::NoError
    } else {
        let code = last
            .parse::<u32>()
            .map_err(|_| context.malformed_row(last, last_token_span(line)))?;
        ExpectedCode::Code(code)
    };

    let description = match tokens.len() {
        0..=2 => String::new(),
        n => tokens[1..n - 1].join(" "),
    };

    Ok(Entry {
        index,
        section,
        number,
        expected,
        description,
        span: line.span,
    })
}

/// Span of the last whitespace-delimited token of a line, within the table.
fn last_token_span(line: &Line<'_>) -> Span {
    let trimmed = line.text.trim_end();
    let start = trimmed
        .rfind(char::is_whitespace)
        .map(|at| at + 1)
        .unwrap_or(0);
    Span {
        start: line.span.start + start,
        end: line.span.start + trimmed.len(),
    }
}
