//! magicgen generates Rust test stubs from Twilio's documented table of
//! magic test phone numbers. Each data row of the embedded table becomes a
//! `#[test]` function calling `test_number(from, to, expected)` with the
//! row's number, the `VALID_NUMBER`/`OUR_NUMBER` sentinels, and the row's
//! expected error code; the output is pasted into the test module of the
//! crate that defines those symbols.

pub use crate::errors::{ErrorCategory, ErrorKind, ErrorReporting, MagicError, SourceContext};
pub use crate::parser::{Entry, ExpectedCode, NumberToken};
pub use crate::table::{Section, Span};

pub mod cli;
pub mod emit;
pub mod errors;
pub mod parser;
pub mod table;
pub mod validation;
