//! Error handling for the generator.
//!
//! A single error struct carries what went wrong (`ErrorKind`), where it
//! happened (`SourceInfo`, a span into the embedded table), and how to help
//! (`DiagnosticInfo`). Everything renders through `miette`, so a bad table
//! row is reported with the offending token underlined in the table source.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::table::{Section, Span};

// ============================================================================
// SOURCE CONTEXT - where spans resolve
// ============================================================================

/// The source text errors point into, usually the embedded table.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Context for the embedded magic-number table.
    pub fn embedded() -> Self {
        Self::from_parts(crate::table::TABLE_NAME, crate::table::MAGIC_TABLE)
    }

    /// Context for an arbitrary table text (tests exercise doctored tables).
    pub fn from_parts(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to a `NamedSource` for miette rendering.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

/// Convert a table span to a miette span.
pub fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// The single error type: kind plus location plus diagnostic extras.
#[derive(Debug)]
pub struct MagicError {
    pub kind: ErrorKind,
    pub source_info: SourceInfo,
    pub diagnostic_info: DiagnosticInfo,
}

/// All failure modes of the parse and validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Parse errors - the generate path aborts on these
    #[error("expected an error code or sentinel, found '{token}'")]
    MalformedRow { token: String },
    #[error("the table has no rows")]
    EmptyTable,

    // Validation errors - collected by the check pass
    #[error("magic number '{literal}' is not in +<digits> form")]
    InvalidPhoneLiteral { literal: String },
    #[error("row index {index} appears more than once")]
    DuplicateIndex { index: usize },
    #[error("{section} section has no 'All Others' fallback row")]
    MissingFallbackRow { section: Section },
    #[error("{section} section has no data rows")]
    MissingSection { section: Section },
}

/// Where the error happened.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Parse => write!(f, "Parse"),
            ErrorCategory::Validation => write!(f, "Validation"),
        }
    }
}

impl ErrorKind {
    /// Category used by the CLI summary and by test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedRow { .. } | Self::EmptyTable => ErrorCategory::Parse,
            Self::InvalidPhoneLiteral { .. }
            | Self::DuplicateIndex { .. }
            | Self::MissingFallbackRow { .. }
            | Self::MissingSection { .. } => ErrorCategory::Validation,
        }
    }

    /// Suffix of the diagnostic code.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::MalformedRow { .. } => "malformed_row",
            Self::EmptyTable => "empty_table",
            Self::InvalidPhoneLiteral { .. } => "invalid_phone_literal",
            Self::DuplicateIndex { .. } => "duplicate_index",
            Self::MissingFallbackRow { .. } => "missing_fallback_row",
            Self::MissingSection { .. } => "missing_section",
        }
    }

    /// Help text attached automatically when the kind has an obvious fix.
    fn default_help(&self) -> Option<String> {
        match self {
            Self::MalformedRow { .. } => Some(
                "error codes are base-10 integers; 'Input-dependent' and 'error' \
                 mark rows with no fixed code"
                    .into(),
            ),
            Self::MissingFallbackRow { .. } => {
                Some("every section ends with an 'All Others' catch-all row".into())
            }
            _ => None,
        }
    }

    fn primary_label(&self) -> String {
        match self {
            Self::MalformedRow { .. } => "unparseable code field".into(),
            Self::EmptyTable => "empty table".into(),
            Self::InvalidPhoneLiteral { .. } => "not a magic number".into(),
            Self::DuplicateIndex { .. } => "duplicate index".into(),
            Self::MissingFallbackRow { .. } => "section without fallback".into(),
            Self::MissingSection { .. } => "section without rows".into(),
        }
    }
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.category(), self.kind)
    }
}

impl std::error::Error for MagicError {}

impl Diagnostic for MagicError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

// ============================================================================
// ERROR REPORTING - context-aware construction
// ============================================================================

/// Contexts that know how to turn an `ErrorKind` into a located error.
pub trait ErrorReporting {
    fn report(&self, kind: ErrorKind, span: Span) -> MagicError;

    fn malformed_row(&self, token: &str, span: Span) -> MagicError {
        self.report(
            ErrorKind::MalformedRow {
                token: token.into(),
            },
            span,
        )
    }

    fn invalid_phone_literal(&self, literal: &str, span: Span) -> MagicError {
        self.report(
            ErrorKind::InvalidPhoneLiteral {
                literal: literal.into(),
            },
            span,
        )
    }
}

impl ErrorReporting for SourceContext {
    fn report(&self, kind: ErrorKind, span: Span) -> MagicError {
        MagicError {
            diagnostic_info: DiagnosticInfo {
                help: kind.default_help(),
                error_code: format!("magicgen::{}", kind.code_suffix()),
            },
            source_info: SourceInfo {
                source: self.to_named_source(),
                primary_span: to_source_span(span),
            },
            kind,
        }
    }
}
