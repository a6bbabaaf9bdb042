//! Code emission.
//!
//! Renders parsed entries into `#[test]` function declarations that call the
//! externally defined `test_number(from, to, expected)` helper. Sender rows
//! put the row's number in the `from` position against the `VALID_NUMBER`
//! sentinel; recipient rows put it in the `to` position against `OUR_NUMBER`.
//!
//! Output goes through an `OutputSink` so tests capture the generated text
//! instead of scraping process stdout. Emission is pure text assembly; given
//! the same entries it is byte-identical on every run.

use crate::parser::Entry;
use crate::table::Section;

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Destination for generated text. `emit` writes the text exactly as given.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Writes to stdout, for CLI use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        print!("{}", text);
    }
}

/// Collects output into a `String` for testing or programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Discards all output.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

// ============================================================================
// RENDERING
// ============================================================================

/// The `test_number(...)` call for one entry, without trailing semicolon.
pub fn render_call(entry: &Entry) -> String {
    match entry.section {
        Section::Sender => format!(
            "test_number({}, VALID_NUMBER, {})",
            entry.number, entry.expected
        ),
        Section::Recipient => format!(
            "test_number(OUR_NUMBER, {}, {})",
            entry.number, entry.expected
        ),
    }
}

/// One full test-function declaration, indented for pasting into a
/// `#[cfg(test)] mod tests` block.
pub fn render_entry(entry: &Entry) -> String {
    format!(
        "    #[test]\n    fn test_{}() {{\n        {};\n    }}\n",
        entry.index,
        render_call(entry)
    )
}

/// Emit every entry in source order, one blank line after each declaration.
pub fn emit_entries(entries: &[Entry], sink: &mut dyn OutputSink) {
    for entry in entries {
        sink.emit(&render_entry(entry));
        sink.emit("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ExpectedCode, NumberToken};
    use crate::table::Span;

    fn entry(index: usize, section: Section, number: NumberToken, expected: ExpectedCode) -> Entry {
        Entry {
            index,
            section,
            number,
            expected,
            description: String::new(),
            span: Span::default(),
        }
    }

    #[test]
    fn sender_rows_take_the_from_position() {
        let entry = entry(
            1,
            Section::Sender,
            NumberToken::Literal("+15005550001".into()),
            ExpectedCode::Code(21212),
        );
        assert_eq!(
            render_call(&entry),
            "test_number(\"+15005550001\", VALID_NUMBER, Some(21212))"
        );
    }

    #[test]
    fn recipient_rows_take_the_to_position() {
        let entry = entry(
            12,
            Section::Recipient,
            NumberToken::Literal("+15005550009".into()),
            ExpectedCode::Code(21614),
        );
        assert_eq!(
            render_call(&entry),
            "test_number(OUR_NUMBER, \"+15005550009\", Some(21614))"
        );
    }

    #[test]
    fn declarations_carry_the_line_index_and_indentation() {
        let entry = entry(
            5,
            Section::Sender,
            NumberToken::AnyValid,
            ExpectedCode::Code(21606),
        );
        assert_eq!(
            render_entry(&entry),
            "    #[test]\n    fn test_5() {\n        test_number(VALID_NUMBER, VALID_NUMBER, Some(21606));\n    }\n"
        );
    }
}
