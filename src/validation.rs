//! Semantic checks over parsed entries.
//!
//! The parser accepts anything row-shaped; this pass checks that the table
//! actually looks like the documented magic-number table. Unlike the parse
//! pass it collects every finding instead of stopping at the first, so a
//! doctored table reports all of its problems at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ErrorKind, ErrorReporting, MagicError, SourceContext};
use crate::parser::{Entry, NumberToken};
use crate::table::{Section, Span};

/// Magic numbers are E.164-ish: a `+` followed by digits only.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d+$").unwrap());

/// Run every check and return the findings, empty when the table is clean.
pub fn validate(entries: &[Entry], context: &SourceContext) -> Vec<MagicError> {
    let mut findings = Vec::new();
    check_phone_literals(entries, context, &mut findings);
    check_indices(entries, context, &mut findings);
    check_sections(entries, context, &mut findings);
    findings
}

fn check_phone_literals(
    entries: &[Entry],
    context: &SourceContext,
    findings: &mut Vec<MagicError>,
) {
    for entry in entries {
        if let NumberToken::Literal(literal) = &entry.number {
            if !PHONE_RE.is_match(literal) {
                findings.push(context.invalid_phone_literal(literal, entry.span));
            }
        }
    }
}

fn check_indices(entries: &[Entry], context: &SourceContext, findings: &mut Vec<MagicError>) {
    for pair in entries.windows(2) {
        // Parsing assigns line ordinals, so anything non-increasing means
        // the entries were assembled by hand.
        if pair[1].index <= pair[0].index {
            findings.push(context.report(
                ErrorKind::DuplicateIndex {
                    index: pair[1].index,
                },
                pair[1].span,
            ));
        }
    }
}

fn check_sections(entries: &[Entry], context: &SourceContext, findings: &mut Vec<MagicError>) {
    for section in [Section::Sender, Section::Recipient] {
        let mut rows = entries.iter().filter(|e| e.section == section);
        let Some(first) = rows.next() else {
            findings.push(context.report(ErrorKind::MissingSection { section }, Span::default()));
            continue;
        };
        let has_fallback = std::iter::once(first)
            .chain(rows)
            .any(|e| e.number == NumberToken::AnyValid);
        if !has_fallback {
            findings.push(context.report(
                ErrorKind::MissingFallbackRow { section },
                first.span,
            ));
        }
    }
}
