//! Strongly-typed numeric primitives for border-progress (zero-cost newtypes).
//!
//! - No raw `f64` pixel lengths in geometry code
//! - Malformed input is rejected at the edges, never propagated as NaN

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a non-negative length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    #[inline]
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px {
        Px(-self.0)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_num(self.0))
    }
}

/// Rendered box of a host element, in CSS pixels.
///
/// Both sides are strictly positive once produced by
/// [`get_effective_dimensions`](crate::get_effective_dimensions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: Px,
    pub height: Px,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Px(width),
            height: Px(height),
        }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Length of the shorter side
    #[inline]
    pub fn min_side(self) -> Px {
        self.width.min(self.height)
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// Clamp a caller-supplied percentage into `[0, 100]`.
///
/// NaN and negative values map to 0, which is also the "hidden" state.
#[inline]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Format a number the way SVG attributes expect it: shortest round-trip
/// decimal, no `-0`, float noise below 1e-6 removed.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let v = (v * 1e6).round() / 1e6;
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
