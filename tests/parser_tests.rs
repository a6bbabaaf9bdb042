// tests/parser_tests.rs

use magicgen::parser::parse;
use magicgen::{Entry, ErrorCategory, ErrorKind, ExpectedCode, NumberToken, Section, SourceContext};

fn parse_embedded() -> Vec<Entry> {
    parse(magicgen::table::MAGIC_TABLE, &SourceContext::embedded()).unwrap()
}

fn parse_text(text: &str) -> Result<Vec<Entry>, magicgen::MagicError> {
    parse(text, &SourceContext::from_parts("doctored", text))
}

#[test]
fn every_data_row_yields_one_entry() {
    // 13 lines, minus the `To` delimiter and the recipient header.
    assert_eq!(parse_embedded().len(), 11);
}

#[test]
fn indices_are_line_ordinals_with_gaps_at_skipped_lines() {
    let indices: Vec<usize> = parse_embedded().iter().map(|e| e.index).collect();
    // The delimiter (line 6) and header (line 7) consume ordinals but emit
    // nothing, so test_6 and test_7 never exist. Kept on purpose: the
    // downstream test module was written against these exact names.
    assert_eq!(indices, vec![1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 13]);
}

#[test]
fn rows_before_the_delimiter_are_senders_and_after_are_recipients() {
    let entries = parse_embedded();
    let (senders, recipients): (Vec<_>, Vec<_>) =
        entries.iter().partition(|e| e.section == Section::Sender);
    assert_eq!(senders.len(), 5);
    assert_eq!(recipients.len(), 6);
    assert!(senders.iter().all(|e| e.index <= 5));
    assert!(recipients.iter().all(|e| e.index >= 8));
}

#[test]
fn all_others_rows_normalize_to_the_any_valid_sentinel() {
    let entries = parse_embedded();
    let fallbacks: Vec<usize> = entries
        .iter()
        .filter(|e| e.number == NumberToken::AnyValid)
        .map(|e| e.index)
        .collect();
    assert_eq!(fallbacks, vec![5, 13]);
}

#[test]
fn no_error_rows_normalize_to_no_error_not_integer_parsing() {
    let entries = parse_embedded();
    // "This number passes all validation. No error" ends in the token
    // `error`, which must become the no-error sentinel rather than being fed
    // to the integer parser.
    let passing = entries.iter().find(|e| e.index == 4).unwrap();
    assert_eq!(passing.number, NumberToken::Literal("+15005550006".into()));
    assert_eq!(passing.expected, ExpectedCode::NoError);
}

#[test]
fn input_dependent_rows_normalize_to_no_error() {
    let entries = parse_embedded();
    let fallback = entries.iter().find(|e| e.index == 13).unwrap();
    assert_eq!(fallback.section, Section::Recipient);
    assert_eq!(fallback.expected, ExpectedCode::NoError);
}

#[test]
fn codes_parse_as_base_ten_integers() {
    let entries = parse_embedded();
    assert_eq!(entries[0].expected, ExpectedCode::Code(21212));
    let incapable = entries
        .iter()
        .find(|e| e.number == NumberToken::Literal("+15005550009".into()))
        .unwrap();
    assert_eq!(incapable.expected, ExpectedCode::Code(21614));
}

#[test]
fn descriptions_carry_the_middle_tokens() {
    let entries = parse_embedded();
    assert_eq!(entries[0].description, "This phone number is invalid.");
}

#[test]
fn header_rows_are_skipped_in_either_section() {
    let entries = parse_text("Value Description Error Code\n+15005550001 invalid 21212\n").unwrap();
    assert_eq!(entries.len(), 1);
    // The header still consumed ordinal 1.
    assert_eq!(entries[0].index, 2);
    assert_eq!(entries[0].section, Section::Sender);
}

#[test]
fn the_delimiter_flips_sections_without_emitting() {
    let table = "+15005550001 invalid 21212\nTo\nValue Description Error Code\n+15005550002 unroutable 21612\n";
    let entries = parse_text(table).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].index, 1);
    assert_eq!(entries[0].section, Section::Sender);
    assert_eq!(entries[1].index, 4);
    assert_eq!(entries[1].section, Section::Recipient);
}

#[test]
fn a_malformed_code_field_aborts_the_parse() {
    let err = parse_text("+15005550001 invalid 21212\n+15005550002 broken twenty\n").unwrap_err();
    assert!(matches!(
        &err.kind,
        ErrorKind::MalformedRow { token } if token == "twenty"
    ));
    assert_eq!(err.kind.category(), ErrorCategory::Parse);
}

#[test]
fn an_all_blank_table_is_rejected() {
    let err = parse_text("\n \n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyTable));
}
