//! Outline geometry: one closed path per detected shape, starting top-center
//!
//! Every outline starts at `(width / 2, stroke_width / 2)` and runs
//! clockwise, so offset 0 along the path is always the top-center of the
//! element whatever its aspect ratio. That is what lets circles, pills and
//! rounded rectangles share the same dasharray arithmetic.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::defaults;
use super::path_builder::PathData;
use crate::shape::ShapeDescriptor;
use crate::types::{Dimensions, Px};

/// Something that can trace itself as a closed SVG path.
#[enum_dispatch]
pub trait Outline {
    /// The path, starting at top-center and running clockwise.
    fn path(&self) -> PathData;

    /// Logical start point of the path.
    fn start(&self) -> DVec2;
}

/// A true circle inscribed in a square element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingOutline {
    pub start: DVec2,
    pub radius: f64,
}

impl Outline for RingOutline {
    fn path(&self) -> PathData {
        // A single large arc that stops just short of where it started
        let end = self.start - dvec2(defaults::ARC_CLOSE_EPSILON, 0.0);
        PathData::new()
            .m(self.start.x, self.start.y)
            .a(self.radius, self.radius, 0.0, true, true, end.x, end.y)
    }

    fn start(&self) -> DVec2 {
        self.start
    }
}

/// A rectangle with equal corner radii; `radius == 0` gives sharp corners.
///
/// `min` and `max` are the corners of the stroke centerline box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectOutline {
    pub min: DVec2,
    pub max: DVec2,
    pub radius: f64,
    pub start_x: f64,
}

impl Outline for RectOutline {
    fn path(&self) -> PathData {
        let (x1, y1) = (self.min.x, self.min.y);
        let (x2, y2) = (self.max.x, self.max.y);
        let r = self.radius;

        let mut path = PathData::new().m(self.start_x, y1).l(x2 - r, y1);
        if r > 0.0 {
            path = path.a(r, r, 0.0, false, true, x2, y1 + r);
        }
        path = path.l(x2, y2 - r);
        if r > 0.0 {
            path = path.a(r, r, 0.0, false, true, x2 - r, y2);
        }
        path = path.l(x1 + r, y2);
        if r > 0.0 {
            path = path.a(r, r, 0.0, false, true, x1, y2 - r);
        }
        path = path.l(x1, y1 + r);
        if r > 0.0 {
            path = path.a(r, r, 0.0, false, true, x1 + r, y1);
        }
        path.z()
    }

    fn start(&self) -> DVec2 {
        dvec2(self.start_x, self.min.y)
    }
}

#[enum_dispatch(Outline)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineShape {
    Ring(RingOutline),
    Rect(RectOutline),
}

/// Pick the outline for a detected shape.
///
/// Circles use `radius = (min(width, height) - stroke_width) / 2`. Rectangles
/// clamp the corner radius to what the shorter side allows, so a radius of
/// half the shorter side or more yields a pill.
pub fn outline_for(shape: &ShapeDescriptor, dims: Dimensions, stroke_width: Px) -> OutlineShape {
    let half_stroke = stroke_width.raw() / 2.0;
    let usable = (dims.min_side() - stroke_width).max(Px::ZERO);
    let start = dvec2(dims.width.raw() / 2.0, half_stroke);

    if shape.is_circular {
        return OutlineShape::Ring(RingOutline {
            start,
            radius: usable.raw() / 2.0,
        });
    }

    let radius = shape.border_radius.min(usable / 2.0).max(Px::ZERO);
    OutlineShape::Rect(RectOutline {
        min: dvec2(half_stroke, half_stroke),
        max: dvec2(
            dims.width.raw() - half_stroke,
            dims.height.raw() - half_stroke,
        ),
        radius: radius.raw(),
        start_x: start.x,
    })
}

/// Build the path for a detected shape.
pub fn synthesize_path(shape: &ShapeDescriptor, dims: Dimensions, stroke_width: Px) -> PathData {
    outline_for(shape, dims, stroke_width).path()
}
