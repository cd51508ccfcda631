//! Parse CSS border-radius values and HH:MM:SS durations via the pest grammar

use crate::errors::{CssValueError, DurationError, SourceContext};
use crate::{CssParser, Rule};
use pest::Parser;

/// Leading numeric part of a `border-radius` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssRadius {
    /// The leading integer, as written (sign included)
    pub value: f64,
    /// True when the text contains `%` anywhere
    pub is_percent: bool,
}

impl CssRadius {
    pub const ZERO: CssRadius = CssRadius {
        value: 0.0,
        is_percent: false,
    };
}

/// Parse the leading integer of a `border-radius` value.
///
/// Follows `parseInt` rules: leading whitespace and a sign are accepted, the
/// integer stops at the first non-digit, everything after it is ignored.
/// `"12.7px"` gives 12, `"50%"` gives 50 with `is_percent` set.
pub fn parse_border_radius(style: &str) -> Result<CssRadius, CssValueError> {
    if style.trim().is_empty() {
        return Err(CssValueError::Empty);
    }

    let no_integer = || {
        let ctx = SourceContext::new("border-radius", style);
        let start = style.len() - style.trim_start().len();
        CssValueError::NoLeadingInteger {
            src: ctx.named_source(),
            span: (start, style.len() - start).into(),
        }
    };

    let pairs = CssParser::parse(Rule::radius_prefix, style).map_err(|_| no_integer())?;
    let value = pairs
        .flatten()
        .find(|p| p.as_rule() == Rule::leading_integer)
        .and_then(|p| p.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(no_integer)?;

    Ok(CssRadius {
        value,
        is_percent: style.contains('%'),
    })
}

/// Lenient form of [`parse_border_radius`]: unparseable text degrades to 0.
///
/// The percent flag is kept even when the number is missing, so `"abc%"`
/// still takes the percentage branch (with a zero radius).
pub fn border_radius_or_zero(style: &str) -> CssRadius {
    match parse_border_radius(style) {
        Ok(radius) => radius,
        Err(err) => {
            crate::log::debug!(style, %err, "border-radius degraded to 0");
            CssRadius {
                value: 0.0,
                is_percent: style.contains('%'),
            }
        }
    }
}

/// Parse an `HH:MM:SS` duration into seconds.
///
/// Empty fields count as zero; fields may carry decimals (`"00:00:1.5"`).
pub fn parse_hms(text: &str) -> Result<f64, DurationError> {
    let ctx = SourceContext::new("duration", text);
    let pairs = CssParser::parse(Rule::hms, text).map_err(|_| DurationError::FieldCount {
        src: ctx.named_source(),
        span: ctx.full_span(),
    })?;

    let mut total = 0.0;
    let fields = pairs.flatten().filter(|p| p.as_rule() == Rule::hms_field);
    for (field, weight) in fields.zip([3600.0, 60.0, 1.0]) {
        let raw = field.as_str().trim();
        let value = if raw.is_empty() {
            0.0
        } else {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    let span = field.as_span();
                    DurationError::InvalidField {
                        src: ctx.named_source(),
                        span: (span.start(), span.end() - span.start()).into(),
                    }
                })?
        };
        total += value * weight;
    }

    Ok(total)
}

/// Lenient form of [`parse_hms`]: malformed durations count as 0 seconds.
pub fn hms_seconds_or_zero(text: &str) -> f64 {
    parse_hms(text).unwrap_or_else(|err| {
        crate::log::debug!(text, %err, "duration degraded to 0");
        0.0
    })
}
