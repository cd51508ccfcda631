//! Shape-aware progress borders drawn as SVG overlays.
//!
//! A progress border traces the outline of a host element (a circle, a sharp
//! rectangle or a rounded rectangle) and fills a fraction of it, starting at
//! top-center and going clockwise. The fill is expressed entirely through
//! `stroke-dasharray` so it can animate with a CSS transition.
//!
//! ```
//! use border_progress::{BorderOptions, ProgressBorders, StaticElement};
//!
//! let mut borders = ProgressBorders::new();
//! let mut button = StaticElement::new(1, 40.0, 40.0).with_border_radius("50%");
//! borders.create_progress_border(&mut button, 25.0, "#4caf50", "#e0e0e0", &BorderOptions::default());
//! borders.run_animation_frames();
//!
//! let markup = borders.markup(button.id).unwrap();
//! assert!(markup.contains(r#"data-config="true-0-40-40-3""#));
//! ```

use pest_derive::Parser;

pub mod angle;
pub mod dimensions;
pub mod errors;
pub mod host;
pub mod log;
pub mod parse;
pub mod progress;
pub mod render;
pub mod shape;
pub mod types;

#[derive(Parser)]
#[grammar = "css.pest"]
pub struct CssParser;

pub use angle::{angle_to_offset, angle_to_percentage, normalize_angle, visual_offset};
pub use dimensions::get_effective_dimensions;
pub use errors::{CssValueError, DurationError};
pub use host::{ElementId, HostElement, StaticElement};
pub use progress::{TimerSnapshot, range_progress, timer_progress};
pub use render::{BorderOptions, ConfigSignature, OverlaySvg, ProgressBorders, RenderedElementState};
pub use shape::{RadiusOverride, ShapeDescriptor, detect_element_shape, detect_shape};
pub use types::{Dimensions, Px};
