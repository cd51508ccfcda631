//! Progress border rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, timings and class names
//! - `types`: `ConfigSignature`, `BorderOptions`, per-element state
//! - `path_builder`: SVG path data with analytic length
//! - `geometry`: Outline synthesis for circles and (rounded) rectangles
//! - `dash`: `stroke-dasharray` arithmetic
//! - `svg`: The overlay model and its markup
//!
//! [`ProgressBorders`] owns the state of every element it has drawn on. Per
//! element the lifecycle is: no overlay → built → (paint-only update or
//! rebuild) → removed. A rebuild happens only when the [`ConfigSignature`]
//! changes.

pub mod dash;
pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod svg;
pub mod types;

use std::collections::HashMap;

pub use dash::{DashArray, ProgressSpan};
pub use geometry::{Outline, OutlineShape, outline_for, synthesize_path};
pub use path_builder::PathData;
pub use svg::{OverlaySvg, PathNode};
pub use types::*;

use crate::angle::angle_to_percentage;
use crate::dimensions::get_effective_dimensions;
use crate::host::{ElementId, HostElement};
use crate::shape::detect_element_shape;
use crate::types::{Px, clamp_percent};

/// Renders and tracks progress border overlays, one per host element.
#[derive(Debug, Default)]
pub struct ProgressBorders {
    states: HashMap<ElementId, RenderedElementState>,
    next_node_id: u64,
}

impl ProgressBorders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the progress border on `element`.
    ///
    /// `progress_value` is a percentage; it is clamped to `[0, 100]` with NaN
    /// treated as 0, which hides the progress arc. Calling again with the same
    /// arguments leaves the state unchanged.
    pub fn create_progress_border<E: HostElement + ?Sized>(
        &mut self,
        element: &mut E,
        progress_value: f64,
        progress_color: &str,
        remaining_color: &str,
        options: &BorderOptions,
    ) {
        let options = options.sanitized();
        let progress = clamp_percent(progress_value);
        let id = element.id();

        if !self.states.contains_key(&id) && element.computed_position().as_deref() == Some("static") {
            element.set_inline_position("relative");
        }

        let dims = get_effective_dimensions(Some(&*element));
        let shape = detect_element_shape(Some(&*element), dims, options.border_radius_override.as_ref());
        let stroke_width = Px(options.stroke_width);
        let signature = ConfigSignature::new(shape, dims, stroke_width);

        let rebuild = self.states.get(&id).is_none_or(|state| state.svg.config != signature);
        if rebuild {
            let d = synthesize_path(&shape, dims, stroke_width);
            let length = element
                .measure_path_length(&d.to_string())
                .filter(|len| usable_length(*len))
                .or_else(|| Some(d.length()).filter(|len| usable_length(*len)))
                .unwrap_or(defaults::FALLBACK_PATH_LENGTH);

            let node_id = self.next_node_id;
            self.next_node_id += 1;
            crate::log::debug!(element = id.0, node_id, config = %signature, length, "building progress border");

            let svg = OverlaySvg::build(node_id, signature, d, length, remaining_color, options.transition());
            self.states.insert(
                id,
                RenderedElementState {
                    svg,
                    pending_frame: None,
                },
            );
        } else {
            crate::log::trace!(element = id.0, progress, "repainting progress border");
        }

        let Some(state) = self.states.get_mut(&id) else {
            return;
        };
        paint(state, element, progress, progress_color, remaining_color, &options);
    }

    /// Legacy entrypoint taking a clock angle (0° = top, clockwise) instead
    /// of an offset percentage.
    pub fn render_at_angle<E: HostElement + ?Sized>(
        &mut self,
        element: &mut E,
        progress_value: f64,
        progress_color: &str,
        remaining_color: &str,
        start_angle: f64,
        options: &BorderOptions,
    ) {
        let options = options
            .clone()
            .with_offset_percent(angle_to_percentage(start_angle) * 100.0);
        self.create_progress_border(element, progress_value, progress_color, remaining_color, &options);
    }

    /// Remove the overlay from `element`. Returns whether there was one.
    pub fn remove_progress_border<E: HostElement + ?Sized>(&mut self, element: &E) -> bool {
        let removed = self.states.remove(&element.id()).is_some();
        if removed {
            crate::log::debug!(element = element.id().0, "removed progress border");
        }
        removed
    }

    /// Apply the dasharray scheduled for the next frame, if any.
    ///
    /// Hosts call this from the frame callback requested through
    /// [`HostElement::request_animation_frame`].
    pub fn run_animation_frame(&mut self, id: ElementId) -> bool {
        let Some(state) = self.states.get_mut(&id) else {
            return false;
        };
        match state.pending_frame.take() {
            Some(target) => {
                state.svg.progress.dasharray = Some(target);
                true
            }
            None => false,
        }
    }

    /// Run every pending frame. Returns how many were applied.
    pub fn run_animation_frames(&mut self) -> usize {
        let mut applied = 0;
        for state in self.states.values_mut() {
            if let Some(target) = state.pending_frame.take() {
                state.svg.progress.dasharray = Some(target);
                applied += 1;
            }
        }
        applied
    }

    pub fn state(&self, id: ElementId) -> Option<&RenderedElementState> {
        self.states.get(&id)
    }

    pub fn overlay(&self, id: ElementId) -> Option<&OverlaySvg> {
        self.states.get(&id).map(|state| &state.svg)
    }

    /// Current overlay of `id` as SVG markup.
    pub fn markup(&self, id: ElementId) -> Option<String> {
        self.overlay(id).map(OverlaySvg::to_markup)
    }

    /// Number of elements with an overlay
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

fn usable_length(length: f64) -> bool {
    length.is_finite() && length > 0.0
}

/// Paint-only update: colors, transition and dasharray.
fn paint<E: HostElement + ?Sized>(
    state: &mut RenderedElementState,
    element: &mut E,
    progress: f64,
    progress_color: &str,
    remaining_color: &str,
    options: &BorderOptions,
) {
    let svg = &mut state.svg;
    svg.background.stroke = remaining_color.to_string();
    svg.progress.transition = Some(options.transition());

    let span = ProgressSpan::new(progress, options.offset_percent, svg.length);
    let was_transparent = svg.progress.stroke == defaults::TRANSPARENT;
    svg.progress.dashoffset = Some(0.0);

    if progress <= 0.0 {
        svg.progress.stroke = defaults::TRANSPARENT.to_string();
        svg.progress.dasharray = Some(DashArray::hidden(svg.length));
        state.pending_frame = None;
        return;
    }

    svg.progress.stroke = progress_color.to_string();
    let target = span.dasharray();

    if was_transparent {
        // Grow in from a zero-length arc at the offset
        svg.progress.dasharray = Some(span.collapsed());
        element.flush_layout();
        if element.request_animation_frame() {
            state.pending_frame = Some(target);
            return;
        }
    }

    svg.progress.dasharray = Some(target);
    state.pending_frame = None;
}
