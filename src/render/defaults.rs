//! Default sizes, timings and class names

/// Stroke width in pixels when none (or a malformed one) is given
pub const STROKE_WIDTH: f64 = 3.0;
/// Transition duration of the progress path, in milliseconds
pub const ANIMATION_DURATION_MS: f64 = 800.0;
/// Side length used for any dimension the host cannot measure
pub const FALLBACK_SIZE: f64 = 38.0;
/// Path length used when neither the host nor the geometry yields one
pub const FALLBACK_PATH_LENGTH: f64 = 300.0;
/// Horizontal gap that keeps the full-circle arc from being zero-length
pub const ARC_CLOSE_EPSILON: f64 = 0.01;

pub const SVG_CLASS: &str = "stroke-dash-aligned-svg";
pub const BACKGROUND_CLASS: &str = "bg-path";
pub const PROGRESS_CLASS: &str = "progress-path";
pub const TRANSPARENT: &str = "transparent";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
