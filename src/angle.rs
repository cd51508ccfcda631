//! Clock-angle helpers for the angle-based entrypoint.
//!
//! Angles are in degrees, 0° at the top, increasing clockwise. New code
//! should pass `offset_percent` directly; these exist so angle-based callers
//! land on the same start point.

use crate::shape::ShapeDescriptor;

/// Normalize an angle into `[0, 360)`. NaN and infinities map to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = ((angle % 360.0) + 360.0) % 360.0;
    if normalized.is_finite() { normalized } else { 0.0 }
}

/// The angle as a fraction of a full turn, in `[0, 1)`.
pub fn angle_to_percentage(angle: f64) -> f64 {
    normalize_angle(angle) / 360.0
}

/// Distance along a path of `path_length` for the given angle, shifted by
/// `visual_offset`.
pub fn angle_to_offset(angle: f64, path_length: f64, visual_offset: f64) -> f64 {
    angle_to_percentage(angle) * path_length + visual_offset
}

/// Correction that makes angle 0 land on top-center for paths whose natural
/// start is a corner rather than the top edge midpoint.
///
/// A circle needs none; a sharp square needs an eighth of the perimeter
/// backwards; rounded rectangles interpolate between the two by how close
/// their radius is to `path_length / 8`.
pub fn visual_offset(shape: &ShapeDescriptor, path_length: f64) -> f64 {
    if shape.is_circular {
        return 0.0;
    }

    let radius = shape.border_radius.raw();
    if radius <= 0.0 {
        return path_length * -0.125;
    }

    let max_radius = path_length / 8.0;
    let ratio = (radius / max_radius).min(1.0);
    path_length * -0.125 * (1.0 - ratio)
}
