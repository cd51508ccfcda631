//! The seam between the renderer and whatever owns the real element tree.
//!
//! A browser binding implements [`HostElement`] over a DOM node; tests and
//! offline tools use [`StaticElement`]. Every capability except [`HostElement::id`]
//! is optional: the default method reports "not available" and the renderer
//! falls back to a default value or skips the behavior.

use crate::types::Dimensions;

/// Opaque identity of a host element.
///
/// The renderer keys its per-element state by this id, so two handles to the
/// same underlying element must report the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Capabilities the renderer needs from a host element.
pub trait HostElement {
    fn id(&self) -> ElementId;

    /// Rendered box size `(width, height)` in CSS pixels, if the host can measure.
    fn bounding_size(&self) -> Option<(f64, f64)> {
        None
    }

    /// Computed `border-radius` style, if the host exposes computed styles.
    fn computed_border_radius(&self) -> Option<String> {
        None
    }

    /// Computed `position` style, if the host exposes computed styles.
    fn computed_position(&self) -> Option<String> {
        None
    }

    /// Write the element's inline `position` style.
    fn set_inline_position(&mut self, _value: &str) {}

    /// Total length of a path with the given `d` attribute, as the host's
    /// renderer measures it.
    fn measure_path_length(&self, _d: &str) -> Option<f64> {
        None
    }

    /// Force a synchronous layout read so pending attribute writes reach the
    /// host's renderer before the next frame.
    fn flush_layout(&mut self) {}

    /// Ask for [`ProgressBorders::run_animation_frame`](crate::ProgressBorders::run_animation_frame)
    /// to be called on the next frame. Returns `false` when the host has no
    /// frame scheduler.
    fn request_animation_frame(&mut self) -> bool {
        false
    }
}

/// Plain in-memory element with fixed measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticElement {
    pub id: ElementId,
    pub size: Option<(f64, f64)>,
    pub border_radius: Option<String>,
    pub position: Option<String>,
    /// Whether [`HostElement::request_animation_frame`] succeeds
    pub has_frame_scheduler: bool,
    /// Number of frames requested so far
    pub frames_requested: u32,
    /// Number of forced layout reads so far
    pub layout_flushes: u32,
}

impl StaticElement {
    /// A measurable element with `position: static` and no border radius.
    pub fn new(id: u64, width: f64, height: f64) -> Self {
        Self {
            id: ElementId(id),
            size: Some((width, height)),
            border_radius: None,
            position: Some("static".to_string()),
            has_frame_scheduler: true,
            frames_requested: 0,
            layout_flushes: 0,
        }
    }

    /// An element that exposes no capabilities at all.
    pub fn bare(id: u64) -> Self {
        Self {
            id: ElementId(id),
            size: None,
            border_radius: None,
            position: None,
            has_frame_scheduler: false,
            frames_requested: 0,
            layout_flushes: 0,
        }
    }

    pub fn with_border_radius(mut self, style: impl Into<String>) -> Self {
        self.border_radius = Some(style.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn without_frame_scheduler(mut self) -> Self {
        self.has_frame_scheduler = false;
        self
    }

    pub fn resize(&mut self, dims: Dimensions) {
        self.size = Some((dims.width.raw(), dims.height.raw()));
    }
}

impl HostElement for StaticElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounding_size(&self) -> Option<(f64, f64)> {
        self.size
    }

    fn computed_border_radius(&self) -> Option<String> {
        self.border_radius.clone()
    }

    fn computed_position(&self) -> Option<String> {
        self.position.clone()
    }

    fn set_inline_position(&mut self, value: &str) {
        self.position = Some(value.to_string());
    }

    fn flush_layout(&mut self) {
        self.layout_flushes += 1;
    }

    fn request_animation_frame(&mut self) -> bool {
        if self.has_frame_scheduler {
            self.frames_requested += 1;
        }
        self.has_frame_scheduler
    }
}
