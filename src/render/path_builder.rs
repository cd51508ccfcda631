//! Fluent builder for SVG path data, with an analytic length.
//!
//! Only the commands outlines need are supported: `M`, `L`, circular `A` and
//! `Z`. Because every segment is a line or a circular arc, the total length
//! can be computed exactly instead of sampled, which is what a host without
//! a `getTotalLength` equivalent falls back to.

use std::f64::consts::TAU;
use std::fmt;

use glam::{DVec2, dvec2};

use crate::types::fmt_num;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Circular arc. `rx` and `ry` are written out, the length uses `rx`.
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// SVG path data under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(mut self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            to: dvec2(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total stroke length of the path.
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        let mut current = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    total += current.distance(p);
                    current = p;
                }
                PathCommand::Arc { rx, large_arc, to, .. } => {
                    total += arc_length(current, to, rx, large_arc);
                    current = to;
                }
                PathCommand::Close => {
                    total += current.distance(subpath_start);
                    current = subpath_start;
                }
            }
        }

        total
    }
}

/// Length of a circular arc between two points.
///
/// A radius too small to span the chord is scaled up to half the chord, as
/// SVG renderers do, which makes the arc a half circle.
fn arc_length(from: DVec2, to: DVec2, radius: f64, large_arc: bool) -> f64 {
    let chord = from.distance(to);
    if chord == 0.0 {
        return 0.0;
    }

    let radius = radius.abs().max(chord / 2.0);
    let minor = 2.0 * (chord / (2.0 * radius)).clamp(-1.0, 1.0).asin();
    let angle = if large_arc { TAU - minor } else { minor };
    radius * angle
}

fn flag(b: bool) -> &'static str {
    if b { "1" } else { "0" }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {} {} {} {} {} {} {}",
                    fmt_num(rx),
                    fmt_num(ry),
                    fmt_num(rotation),
                    flag(large_arc),
                    flag(sweep),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn formats_commands() {
        let path = PathData::new()
            .m(0.0, 0.0)
            .l(10.0, 0.0)
            .a(5.0, 5.0, 0.0, false, true, 15.0, 5.0)
            .z();
        assert_eq!(path.to_string(), "M 0 0 L 10 0 A 5 5 0 0 1 15 5 Z");
    }

    #[test]
    fn square_length() {
        let path = PathData::new().m(0.0, 0.0).l(10.0, 0.0).l(10.0, 10.0).l(0.0, 10.0).z();
        assert_eq!(path.length(), 40.0);
    }

    #[test]
    fn quarter_arc_length() {
        let path = PathData::new().m(0.0, 0.0).a(10.0, 10.0, 0.0, false, true, 10.0, 10.0);
        assert!((path.length() - 10.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn large_arc_is_nearly_a_full_circle() {
        let path = PathData::new().m(20.0, 0.0).a(20.0, 20.0, 0.0, true, true, 19.99, 0.0);
        let full = TAU * 20.0;
        assert!(path.length() < full);
        assert!(full - path.length() < 0.02);
    }

    #[test]
    fn undersized_radius_becomes_half_circle() {
        let path = PathData::new().m(0.0, 0.0).a(1.0, 1.0, 0.0, false, true, 10.0, 0.0);
        assert!((path.length() - 5.0 * PI).abs() < 1e-9);
    }
}
