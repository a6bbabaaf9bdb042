//! The embedded magic-number table.
//!
//! The table below is pasted verbatim from Twilio's test-credentials
//! documentation. It has two halves: rows describing "From" numbers, then a
//! `To` delimiter line, then rows describing "To" numbers. Each data row is
//! `<value> <description...> <error code>`, separated by runs of whitespace;
//! only the first and last whitespace-delimited tokens of a row carry
//! meaning.

use serde::Serialize;

/// Display name for the embedded table, used when rendering diagnostics.
pub const TABLE_NAME: &str = "magic-numbers";

/// The magic test numbers and their expected error codes, byte-for-byte as
/// documented. Updating this constant is the only maintenance this tool
/// ever needs.
pub const MAGIC_TABLE: &str = "
+15005550001 	This phone number is invalid. 	21212
+15005550007 	This phone number is not owned by your account or is not SMS-capable. 	21606
+15005550008 	This number has an SMS message queue that is full. 	21611
+15005550006 	This number passes all validation. 	No error
All Others 	This phone number is not owned by your account or is not SMS-capable. 	21606
To
Value 	Description 	Error Code
+15005550001 	This phone number is invalid. 	21211
+15005550002 	Twilio cannot route to this number. 	21612
+15005550003 	Your account doesn't have the international permissions necessary to SMS this number. 	21408
+15005550004 	This number is blacklisted for your account. 	21610
+15005550009 	This number is incapable of receiving SMS messages. 	21614
All Others 	Any other phone number is validated normally. 	Input-dependent
";

// ============================================================================
// CORE TYPES
// ============================================================================

/// Which half of the table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    /// Rows before the `To` delimiter: the row's number is the sender.
    Sender,
    /// Rows after the `To` delimiter: the row's number is the recipient.
    Recipient,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Sender => write!(f, "sender"),
            Section::Recipient => write!(f, "recipient"),
        }
    }
}

/// A byte range within the table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Length of the span, never zero so diagnostics always underline
    /// something.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One line of the table, with its position in the source text.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    pub span: Span,
}

// ============================================================================
// LINE SPLITTING
// ============================================================================

/// Splits the table into lines, preserving order and byte offsets.
///
/// Leading and trailing blank lines are stripped (the embedded literal starts
/// and ends with a newline); interior lines are kept as-is.
pub fn lines(source: &str) -> Vec<Line<'_>> {
    let mut all = Vec::new();
    let mut offset = 0;
    for text in source.split('\n') {
        all.push(Line {
            text,
            span: Span {
                start: offset,
                end: offset + text.len(),
            },
        });
        offset += text.len() + 1;
    }

    let is_blank = |line: &Line<'_>| line.text.trim().is_empty();
    let start = all.iter().position(|l| !is_blank(l));
    let end = all.iter().rposition(|l| !is_blank(l));
    match (start, end) {
        (Some(start), Some(end)) => all.drain(start..=end).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_edges_are_stripped_but_offsets_are_absolute() {
        let lines = lines("\nalpha\nbeta\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "alpha");
        assert_eq!(lines[0].span, Span { start: 1, end: 6 });
        assert_eq!(lines[1].text, "beta");
        assert_eq!(lines[1].span, Span { start: 7, end: 11 });
    }

    #[test]
    fn all_blank_input_yields_no_lines() {
        assert!(lines("\n  \n\t\n").is_empty());
    }
}
