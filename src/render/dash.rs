//! `stroke-dasharray` arithmetic for painting progress along a path.
//!
//! All positioning is encoded in the dash segments; the dash offset stays 0.
//! Every dasharray produced here sums to the path length, so the pattern
//! never repeats visibly along the path.

use std::fmt;

use crate::types::{clamp_percent, fmt_num};

/// Alternating visible / invisible segment lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct DashArray(Vec<f64>);

impl DashArray {
    pub fn segments(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all segments
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Nothing visible: `"0 {length}"`.
    pub fn hidden(length: f64) -> Self {
        Self(vec![0.0, length])
    }

    /// Whole path visible, no seam: `"{length} 0"`.
    pub fn full(length: f64) -> Self {
        Self(vec![length, 0.0])
    }

    /// Zero-length arc parked at the offset: `"0 {offset} 0 {length - offset}"`.
    ///
    /// Used as the starting point of the first-appearance grow-in.
    pub fn collapsed(offset_length: f64, length: f64) -> Self {
        Self(vec![0.0, offset_length, 0.0, length - offset_length])
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&fmt_num(*segment))?;
        }
        Ok(())
    }
}

/// Arc lengths derived from percentages of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpan {
    pub progress_percent: f64,
    pub progress_length: f64,
    pub offset_length: f64,
    pub length: f64,
}

impl ProgressSpan {
    /// Both percentages are clamped to `[0, 100]`.
    pub fn new(progress_percent: f64, offset_percent: f64, length: f64) -> Self {
        let progress_percent = clamp_percent(progress_percent);
        Self {
            progress_percent,
            progress_length: progress_percent / 100.0 * length,
            offset_length: clamp_percent(offset_percent) / 100.0 * length,
            length,
        }
    }

    /// Whether the visible arc runs past the end of the path.
    pub fn wraps(&self) -> bool {
        self.offset_length + self.progress_length > self.length
    }

    /// The dasharray that paints this span.
    ///
    /// - no wrap: `0 {offset} {progress} {rest}`
    /// - wrap: the overflow is drawn from the path start, then a gap up to
    ///   the offset, then the arc to the path end: `{wrap} {offset - wrap} {end} 0`
    pub fn dasharray(&self) -> DashArray {
        let Self {
            progress_percent,
            progress_length,
            offset_length,
            length,
        } = *self;

        if progress_percent >= 100.0 {
            DashArray::full(length)
        } else if progress_length == 0.0 {
            DashArray::hidden(length)
        } else if !self.wraps() {
            DashArray(vec![
                0.0,
                offset_length,
                progress_length,
                length - offset_length - progress_length,
            ])
        } else {
            let end = length - offset_length;
            let wrap = progress_length - end;
            DashArray(vec![wrap, offset_length - wrap, end, 0.0])
        }
    }

    /// Starting point of the grow-in animation for this span.
    pub fn collapsed(&self) -> DashArray {
        DashArray::collapsed(self.offset_length, self.length)
    }
}
