//! Core types for progress border rendering

use std::fmt;

use super::dash::DashArray;
use super::defaults;
use super::svg::OverlaySvg;
use crate::shape::{RadiusOverride, ShapeDescriptor};
use crate::types::{Dimensions, Px, clamp_percent, fmt_num};

/// Everything the outline geometry depends on.
///
/// Equal signatures mean equal paths, so a render whose signature matches
/// the stored one only repaints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigSignature {
    pub is_circular: bool,
    pub border_radius: Px,
    pub width: Px,
    pub height: Px,
    pub stroke_width: Px,
}

impl ConfigSignature {
    pub fn new(shape: ShapeDescriptor, dims: Dimensions, stroke_width: Px) -> Self {
        Self {
            is_circular: shape.is_circular,
            border_radius: shape.border_radius,
            width: dims.width,
            height: dims.height,
            stroke_width,
        }
    }

    pub fn shape(&self) -> ShapeDescriptor {
        ShapeDescriptor {
            is_circular: self.is_circular,
            border_radius: self.border_radius,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Rendered as the overlay's `data-config` attribute.
impl fmt::Display for ConfigSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.is_circular, self.border_radius, self.width, self.height, self.stroke_width
        )
    }
}

/// Per-call rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderOptions {
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Transition duration of the progress path, in milliseconds
    pub animation_duration_ms: f64,
    /// Border radius to use instead of the element's computed style
    pub border_radius_override: Option<RadiusOverride>,
    /// Where the arc starts, as a percentage of the path from top-center
    pub offset_percent: f64,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            stroke_width: defaults::STROKE_WIDTH,
            animation_duration_ms: defaults::ANIMATION_DURATION_MS,
            border_radius_override: None,
            offset_percent: 0.0,
        }
    }
}

impl BorderOptions {
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_animation_duration_ms(mut self, ms: f64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    pub fn with_border_radius_override(mut self, radius: impl Into<RadiusOverride>) -> Self {
        self.border_radius_override = Some(radius.into());
        self
    }

    pub fn with_offset_percent(mut self, offset_percent: f64) -> Self {
        self.offset_percent = offset_percent;
        self
    }

    /// Copy with malformed values replaced by defaults and the offset clamped.
    pub fn sanitized(&self) -> Self {
        let stroke_width = match Px::try_non_negative(self.stroke_width) {
            Ok(px) => px.raw(),
            Err(err) => {
                crate::log::warn!(value = self.stroke_width, %err, "stroke width replaced by default");
                defaults::STROKE_WIDTH
            }
        };
        let animation_duration_ms = if self.animation_duration_ms.is_finite() && self.animation_duration_ms >= 0.0 {
            self.animation_duration_ms
        } else {
            crate::log::warn!(value = self.animation_duration_ms, "animation duration replaced by default");
            defaults::ANIMATION_DURATION_MS
        };

        Self {
            stroke_width,
            animation_duration_ms,
            border_radius_override: self.border_radius_override.clone(),
            offset_percent: clamp_percent(self.offset_percent),
        }
    }

    /// CSS `transition` of the progress path
    pub fn transition(&self) -> String {
        format!("all {}ms ease-out", fmt_num(self.animation_duration_ms))
    }
}

/// What the renderer remembers about one element between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElementState {
    pub svg: OverlaySvg,
    /// Dasharray to apply on the next animation frame (grow-in target)
    pub pending_frame: Option<DashArray>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_display() {
        let sig = ConfigSignature::new(ShapeDescriptor::CIRCLE, Dimensions::square(40.0), Px(3.0));
        assert_eq!(sig.to_string(), "true-0-40-40-3");

        let sig = ConfigSignature::new(ShapeDescriptor::rounded(8.0), Dimensions::new(80.0, 40.0), Px(2.5));
        assert_eq!(sig.to_string(), "false-8-80-40-2.5");
    }

    #[test]
    fn signature_equality_tracks_geometry() {
        let a = ConfigSignature::new(ShapeDescriptor::rounded(8.0), Dimensions::square(40.0), Px(3.0));
        assert_eq!(a, ConfigSignature::new(ShapeDescriptor::rounded(8.0), Dimensions::square(40.0), Px(3.0)));
        assert_ne!(a, ConfigSignature::new(ShapeDescriptor::rounded(9.0), Dimensions::square(40.0), Px(3.0)));
        assert_ne!(a, ConfigSignature::new(ShapeDescriptor::rounded(8.0), Dimensions::square(41.0), Px(3.0)));
        assert_ne!(a, ConfigSignature::new(ShapeDescriptor::rounded(8.0), Dimensions::square(40.0), Px(4.0)));
    }

    #[test]
    fn defaults() {
        let options = BorderOptions::default();
        assert_eq!(options.stroke_width, 3.0);
        assert_eq!(options.animation_duration_ms, 800.0);
        assert_eq!(options.offset_percent, 0.0);
        assert_eq!(options.transition(), "all 800ms ease-out");
    }

    #[test]
    fn sanitized_replaces_malformed_values() {
        let options = BorderOptions::default()
            .with_stroke_width(f64::NAN)
            .with_animation_duration_ms(-5.0)
            .with_offset_percent(140.0)
            .sanitized();
        assert_eq!(options.stroke_width, 3.0);
        assert_eq!(options.animation_duration_ms, 800.0);
        assert_eq!(options.offset_percent, 100.0);

        let options = BorderOptions::default().with_offset_percent(f64::NAN).sanitized();
        assert_eq!(options.offset_percent, 0.0);

        let options = BorderOptions::default().with_stroke_width(5.0).sanitized();
        assert_eq!(options.stroke_width, 5.0);
    }
}
