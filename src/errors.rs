//! Error types with rich diagnostics using miette
//!
//! Only the strict parsers surface these. Rendering never fails: it degrades
//! to defaults instead.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (a CSS property or config key)
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span covering the whole source text
    pub fn full_span(&self) -> SourceSpan {
        (0, self.source.len()).into()
    }
}

// ============================================================================
// CSS Value Errors
// ============================================================================

/// Errors from parsing a `border-radius` value
#[derive(Error, Diagnostic, Debug)]
pub enum CssValueError {
    #[error("empty border-radius value")]
    #[diagnostic(code(border_progress::css::empty))]
    Empty,

    #[error("border-radius does not start with an integer")]
    #[diagnostic(
        code(border_progress::css::no_leading_integer),
        help("values such as `8px`, `50%` or `12` are accepted")
    )]
    NoLeadingInteger {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a number here")]
        span: SourceSpan,
    },
}

// ============================================================================
// Duration Errors
// ============================================================================

/// Errors from parsing an `HH:MM:SS` duration
#[derive(Error, Diagnostic, Debug)]
pub enum DurationError {
    #[error("duration must have exactly three `:`-separated fields")]
    #[diagnostic(code(border_progress::duration::field_count))]
    FieldCount {
        #[source_code]
        src: NamedSource<String>,
        #[label("not in HH:MM:SS form")]
        span: SourceSpan,
    },

    #[error("duration field is not a number")]
    #[diagnostic(code(border_progress::duration::invalid_field))]
    InvalidField {
        #[source_code]
        src: NamedSource<String>,
        #[label("this field")]
        span: SourceSpan,
    },
}
