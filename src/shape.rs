//! Shape detection from CSS `border-radius`
//!
//! Turns a border-radius value plus the element's dimensions into a
//! [`ShapeDescriptor`]: either a true circle, or a (possibly rounded)
//! rectangle with a pixel corner radius.

use std::fmt;

use crate::host::HostElement;
use crate::parse::border_radius_or_zero;
use crate::types::{Dimensions, Px, fmt_num};

/// Result of shape detection.
///
/// `border_radius` is only meaningful when `is_circular` is false; circles
/// always report 0 so that every circle of a given size has the same
/// signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    pub is_circular: bool,
    pub border_radius: Px,
}

impl ShapeDescriptor {
    pub const SQUARE: ShapeDescriptor = ShapeDescriptor {
        is_circular: false,
        border_radius: Px::ZERO,
    };

    pub const CIRCLE: ShapeDescriptor = ShapeDescriptor {
        is_circular: true,
        border_radius: Px::ZERO,
    };

    pub fn rounded(radius: f64) -> Self {
        Self {
            is_circular: false,
            border_radius: Px(radius),
        }
    }
}

/// Caller-supplied border radius that takes precedence over the computed style.
#[derive(Debug, Clone, PartialEq)]
pub enum RadiusOverride {
    /// Pixel radius
    Px(f64),
    /// Raw CSS text, e.g. `"50%"` or `"12px"`
    Css(String),
}

impl RadiusOverride {
    /// The override as CSS text. Pixel values become `"{n}px"`.
    pub fn to_css(&self) -> String {
        match self {
            RadiusOverride::Px(px) => format!("{}px", fmt_num(*px)),
            RadiusOverride::Css(css) => css.clone(),
        }
    }
}

impl fmt::Display for RadiusOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for RadiusOverride {
    fn from(px: f64) -> Self {
        RadiusOverride::Px(px)
    }
}

impl From<&str> for RadiusOverride {
    fn from(css: &str) -> Self {
        RadiusOverride::Css(css.to_string())
    }
}

impl From<String> for RadiusOverride {
    fn from(css: String) -> Self {
        RadiusOverride::Css(css)
    }
}

/// Classify a border-radius value for an element of the given size.
///
/// - empty or missing ⇒ square
/// - text containing `%` ⇒ the leading integer is a percentage of the shorter side
/// - otherwise ⇒ the leading integer is a pixel radius
///
/// The shape is circular only when the element is square and the radius
/// reaches half its side. Unparseable and negative radii count as 0.
pub fn detect_shape(style: Option<&str>, dims: Dimensions) -> ShapeDescriptor {
    let Some(style) = style.filter(|s| !s.trim().is_empty()) else {
        return ShapeDescriptor::SQUARE;
    };

    let parsed = border_radius_or_zero(style);
    let amount = parsed.value.max(0.0);
    let radius = if parsed.is_percent {
        dims.min_side() * (amount / 100.0)
    } else {
        Px(amount)
    };

    if dims.is_square() && radius >= dims.min_side() / 2.0 {
        ShapeDescriptor::CIRCLE
    } else {
        ShapeDescriptor {
            is_circular: false,
            border_radius: radius,
        }
    }
}

/// The border-radius text to classify for `element`.
///
/// Precedence: the override, then the element's computed style, then empty.
pub fn border_radius_style<E: HostElement + ?Sized>(
    element: Option<&E>,
    radius_override: Option<&RadiusOverride>,
) -> String {
    if let Some(radius_override) = radius_override {
        return radius_override.to_css();
    }
    element
        .and_then(|e| e.computed_border_radius())
        .unwrap_or_default()
}

/// Detect the shape of `element`, honoring an explicit radius override.
pub fn detect_element_shape<E: HostElement + ?Sized>(
    element: Option<&E>,
    dims: Dimensions,
    radius_override: Option<&RadiusOverride>,
) -> ShapeDescriptor {
    let style = border_radius_style(element, radius_override);
    detect_shape(Some(&style), dims)
}
