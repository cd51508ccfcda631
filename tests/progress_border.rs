//! End-to-end behavior of `ProgressBorders` against in-memory host elements.
//!
//! Run with logs: RUST_LOG=border_progress=trace cargo test --features tracing

use border_progress::{
    BorderOptions, ElementId, HostElement, ProgressBorders, RenderedElementState, StaticElement,
};
use border_progress::types::Dimensions;

const GREEN: &str = "#4caf50";
const GREY: &str = "#e0e0e0";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A host whose renderer reports a fixed path length, like a browser's
/// `getTotalLength()` would.
struct Measured {
    inner: StaticElement,
    length: f64,
}

impl Measured {
    fn new(inner: StaticElement, length: f64) -> Self {
        Self { inner, length }
    }
}

impl HostElement for Measured {
    fn id(&self) -> ElementId {
        self.inner.id()
    }

    fn bounding_size(&self) -> Option<(f64, f64)> {
        self.inner.bounding_size()
    }

    fn computed_border_radius(&self) -> Option<String> {
        self.inner.computed_border_radius()
    }

    fn computed_position(&self) -> Option<String> {
        self.inner.computed_position()
    }

    fn set_inline_position(&mut self, value: &str) {
        self.inner.set_inline_position(value)
    }

    fn measure_path_length(&self, _d: &str) -> Option<f64> {
        Some(self.length)
    }

    fn flush_layout(&mut self) {
        self.inner.flush_layout()
    }

    fn request_animation_frame(&mut self) -> bool {
        self.inner.request_animation_frame()
    }
}

fn dasharray(borders: &ProgressBorders, id: ElementId) -> String {
    borders
        .overlay(id)
        .and_then(|svg| svg.progress.dasharray.as_ref())
        .map(|d| d.to_string())
        .unwrap_or_default()
}

fn state(borders: &ProgressBorders, id: ElementId) -> RenderedElementState {
    borders.state(id).cloned().expect("element should have an overlay")
}

#[test]
fn zero_progress_hides_the_arc() {
    init_tracing();
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0);
    borders.create_progress_border(&mut el, 0.0, GREEN, GREY, &BorderOptions::default());

    let svg = borders.overlay(el.id).unwrap();
    // 37px centerline square
    assert_eq!(svg.length, 148.0);
    assert_eq!(svg.progress.stroke, "transparent");
    assert_eq!(svg.background.stroke, GREY);
    assert_eq!(dasharray(&borders, el.id), "0 148");
    assert_eq!(borders.state(el.id).unwrap().pending_frame, None);
    assert_eq!(el.frames_requested, 0);
}

#[test]
fn full_progress_has_no_seam() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0).without_frame_scheduler();
    borders.create_progress_border(&mut el, 100.0, GREEN, GREY, &BorderOptions::default());
    assert_eq!(dasharray(&borders, el.id), "148 0");
}

#[test]
fn offset_positions_the_arc() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0).without_frame_scheduler(), 300.0);
    let options = BorderOptions::default().with_offset_percent(25.0);
    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
    assert_eq!(dasharray(&borders, ElementId(1)), "0 75 150 75");

    let options = BorderOptions::default().with_offset_percent(75.0);
    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
    assert_eq!(dasharray(&borders, ElementId(1)), "75 150 75 0");
}

#[test]
fn dasharrays_always_sum_to_length() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0).without_frame_scheduler(), 300.0);
    for offset in [0.0, 10.0, 33.0, 50.0, 99.0, 100.0] {
        for progress in [0.0, 1.0, 25.0, 49.5, 67.0, 99.9, 100.0] {
            let options = BorderOptions::default().with_offset_percent(offset);
            borders.create_progress_border(&mut el, progress, GREEN, GREY, &options);
            let svg = borders.overlay(ElementId(1)).unwrap();
            let total = svg.progress.dasharray.as_ref().unwrap().total();
            assert!((total - 300.0).abs() < 1e-9, "offset {offset} progress {progress}: {total}");
            assert_eq!(svg.progress.dashoffset, Some(0.0));
        }
    }
}

#[test]
fn first_appearance_grows_in_on_next_frame() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0), 300.0);
    borders.create_progress_border(&mut el, 40.0, GREEN, GREY, &BorderOptions::default());

    // Parked at the offset until the frame runs
    assert_eq!(dasharray(&borders, ElementId(1)), "0 0 0 300");
    assert_eq!(el.inner.layout_flushes, 1);
    assert_eq!(el.inner.frames_requested, 1);
    let pending = borders.state(ElementId(1)).unwrap().pending_frame.clone();
    assert_eq!(pending.map(|d| d.to_string()).as_deref(), Some("0 0 120 180"));

    assert!(borders.run_animation_frame(ElementId(1)));
    assert_eq!(dasharray(&borders, ElementId(1)), "0 0 120 180");
    assert_eq!(borders.state(ElementId(1)).unwrap().pending_frame, None);

    // Already visible: later updates apply directly
    borders.create_progress_border(&mut el, 60.0, GREEN, GREY, &BorderOptions::default());
    assert_eq!(dasharray(&borders, ElementId(1)), "0 0 180 120");
    assert_eq!(el.inner.frames_requested, 1);
}

#[test]
fn first_appearance_without_scheduler_applies_immediately() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0).without_frame_scheduler(), 300.0);
    borders.create_progress_border(&mut el, 40.0, GREEN, GREY, &BorderOptions::default());
    assert_eq!(dasharray(&borders, ElementId(1)), "0 0 120 180");
    assert_eq!(el.inner.layout_flushes, 1);
    assert_eq!(borders.state(ElementId(1)).unwrap().pending_frame, None);
}

#[test]
fn hiding_then_showing_grows_in_again() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0), 300.0);
    let options = BorderOptions::default();

    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
    borders.create_progress_border(&mut el, 0.0, GREEN, GREY, &options);
    // The stale grow-in target must not resurrect the arc
    assert!(!borders.run_animation_frame(ElementId(1)));
    assert_eq!(dasharray(&borders, ElementId(1)), "0 300");
    assert_eq!(borders.overlay(ElementId(1)).unwrap().progress.stroke, "transparent");

    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
    assert_eq!(el.inner.frames_requested, 2);
    assert_eq!(borders.run_animation_frames(), 1);
    assert_eq!(dasharray(&borders, ElementId(1)), "0 0 150 150");
}

#[test]
fn repeated_render_is_idempotent() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 96.0, 40.0).with_border_radius("8px");
    let options = BorderOptions::default().with_offset_percent(10.0);

    borders.create_progress_border(&mut el, 30.0, GREEN, GREY, &options);
    borders.run_animation_frames();
    let before = state(&borders, el.id);

    borders.create_progress_border(&mut el, 30.0, GREEN, GREY, &options);
    assert_eq!(state(&borders, el.id), before);
    assert_eq!(borders.len(), 1);
}

#[test]
fn paint_only_updates_keep_the_overlay() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0).with_border_radius("6px");
    borders.create_progress_border(&mut el, 10.0, GREEN, GREY, &BorderOptions::default());
    let before = state(&borders, el.id);

    let options = BorderOptions::default().with_animation_duration_ms(250.0);
    borders.create_progress_border(&mut el, 90.0, "#f44336", "#111", &options);
    let after = state(&borders, el.id);

    assert_eq!(after.svg.node_id, before.svg.node_id);
    assert_eq!(after.svg.background.d, before.svg.background.d);
    assert_eq!(after.svg.config, before.svg.config);
    assert_eq!(after.svg.background.stroke, "#111");
    assert_eq!(after.svg.progress.stroke, "#f44336");
    assert_eq!(after.svg.progress.transition.as_deref(), Some("all 250ms ease-out"));
}

#[test]
fn geometry_changes_rebuild() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0);
    borders.create_progress_border(&mut el, 10.0, GREEN, GREY, &BorderOptions::default());
    let first = state(&borders, el.id).svg;

    el.resize(Dimensions::new(60.0, 40.0));
    borders.create_progress_border(&mut el, 10.0, GREEN, GREY, &BorderOptions::default());
    let resized = state(&borders, el.id).svg;
    assert_ne!(resized.node_id, first.node_id);
    assert_eq!(resized.config.to_string(), "false-0-60-40-3");

    let options = BorderOptions::default().with_stroke_width(5.0);
    borders.create_progress_border(&mut el, 10.0, GREEN, GREY, &options);
    let thicker = state(&borders, el.id).svg;
    assert_ne!(thicker.node_id, resized.node_id);
    assert_eq!(thicker.config.to_string(), "false-0-60-40-5");
    assert_eq!(borders.len(), 1);
}

#[test]
fn progress_is_clamped() {
    let mut borders = ProgressBorders::new();
    let mut over = StaticElement::new(1, 40.0, 40.0).without_frame_scheduler();
    let mut nan = StaticElement::new(2, 40.0, 40.0).without_frame_scheduler();
    let mut negative = StaticElement::new(3, 40.0, 40.0).without_frame_scheduler();
    let options = BorderOptions::default();

    borders.create_progress_border(&mut over, 150.0, GREEN, GREY, &options);
    borders.create_progress_border(&mut nan, f64::NAN, GREEN, GREY, &options);
    borders.create_progress_border(&mut negative, -10.0, GREEN, GREY, &options);

    assert_eq!(dasharray(&borders, over.id), "148 0");
    assert_eq!(dasharray(&borders, nan.id), "0 148");
    assert_eq!(dasharray(&borders, negative.id), "0 148");
    assert_eq!(borders.overlay(nan.id).unwrap().progress.stroke, "transparent");
}

#[test]
fn static_position_becomes_relative_once() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0);
    borders.create_progress_border(&mut el, 10.0, GREEN, GREY, &BorderOptions::default());
    assert_eq!(el.position.as_deref(), Some("relative"));

    let mut unstyled = StaticElement::bare(2);
    borders.create_progress_border(&mut unstyled, 10.0, GREEN, GREY, &BorderOptions::default());
    assert_eq!(unstyled.position, None);
}

#[test]
fn shapes_are_detected_from_computed_style() {
    let mut borders = ProgressBorders::new();
    let options = BorderOptions::default();
    let cases = [
        (StaticElement::new(1, 40.0, 40.0).with_border_radius("50%"), "true-0-40-40-3"),
        (StaticElement::new(2, 120.0, 36.0).with_border_radius("18px"), "false-18-120-36-3"),
        (StaticElement::new(3, 80.0, 40.0).with_border_radius("50%"), "false-20-80-40-3"),
        (StaticElement::new(4, 40.0, 40.0).with_border_radius("12.7px"), "false-12-40-40-3"),
        (StaticElement::new(5, 40.0, 40.0).with_border_radius("-4px"), "false-0-40-40-3"),
        (StaticElement::bare(6), "false-0-38-38-3"),
    ];

    for (mut el, expected) in cases {
        borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
        let config = borders.overlay(el.id).unwrap().config.to_string();
        assert_eq!(config, expected, "element {:?}", el.id);
    }
}

#[test]
fn radius_override_beats_computed_style() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0).with_border_radius("50%");
    let options = BorderOptions::default().with_border_radius_override(4.0);
    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &options);
    assert_eq!(borders.overlay(el.id).unwrap().config.to_string(), "false-4-40-40-3");

    let mut plain = StaticElement::new(2, 40.0, 40.0);
    let options = BorderOptions::default().with_border_radius_override("50%");
    borders.create_progress_border(&mut plain, 50.0, GREEN, GREY, &options);
    assert!(borders.overlay(plain.id).unwrap().config.is_circular);
}

#[test]
fn angle_entrypoint_matches_offsets() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0).without_frame_scheduler(), 300.0);
    let options = BorderOptions::default();

    borders.render_at_angle(&mut el, 50.0, GREEN, GREY, 90.0, &options);
    assert_eq!(dasharray(&borders, ElementId(1)), "0 75 150 75");

    borders.render_at_angle(&mut el, 50.0, GREEN, GREY, -90.0, &options);
    assert_eq!(dasharray(&borders, ElementId(1)), "75 150 75 0");
}

#[test]
fn removal_is_idempotent() {
    let mut borders = ProgressBorders::new();
    let mut el = StaticElement::new(1, 40.0, 40.0);
    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &BorderOptions::default());
    let node_id = borders.overlay(el.id).unwrap().node_id;

    assert!(borders.remove_progress_border(&el));
    assert!(!borders.remove_progress_border(&el));
    assert!(borders.is_empty());
    assert!(!borders.run_animation_frame(el.id));

    borders.create_progress_border(&mut el, 50.0, GREEN, GREY, &BorderOptions::default());
    assert_ne!(borders.overlay(el.id).unwrap().node_id, node_id);
}

#[test]
fn elements_are_tracked_independently() {
    let mut borders = ProgressBorders::new();
    let mut a = StaticElement::new(1, 40.0, 40.0).without_frame_scheduler();
    let mut b = StaticElement::new(2, 40.0, 40.0).without_frame_scheduler();
    borders.create_progress_border(&mut a, 25.0, GREEN, GREY, &BorderOptions::default());
    borders.create_progress_border(&mut b, 100.0, GREEN, GREY, &BorderOptions::default());

    assert_eq!(dasharray(&borders, a.id), "0 0 37 111");
    assert_eq!(dasharray(&borders, b.id), "148 0");
    assert!(borders.remove_progress_border(&a));
    assert_eq!(dasharray(&borders, b.id), "148 0");
}

#[test]
fn ring_markup() {
    let mut borders = ProgressBorders::new();
    let mut el = Measured::new(StaticElement::new(1, 40.0, 40.0).with_border_radius("50%"), 300.0);
    borders.create_progress_border(&mut el, 25.0, GREEN, GREY, &BorderOptions::default());
    borders.run_animation_frames();

    insta::assert_snapshot!(
        borders.markup(ElementId(1)).unwrap(),
        @r##"<svg xmlns="http://www.w3.org/2000/svg" class="stroke-dash-aligned-svg" viewBox="0 0 40 40" style="position:absolute;top:0;left:0;width:40px;height:40px;pointer-events:none" data-config="true-0-40-40-3"><path class="bg-path" d="M 20 1.5 A 18.5 18.5 0 1 1 19.99 1.5" stroke="#e0e0e0" stroke-width="3" fill="none"/><path class="progress-path" d="M 20 1.5 A 18.5 18.5 0 1 1 19.99 1.5" stroke="#4caf50" stroke-width="3" fill="none" stroke-linecap="round" style="transition: all 800ms ease-out" stroke-dasharray="0 0 75 225" stroke-dashoffset="0" data-length="300"/></svg>"##
    );
}

#[test]
fn markup_is_valid_svg() {
    let mut borders = ProgressBorders::new();
    let samples = [
        StaticElement::new(1, 40.0, 40.0).with_border_radius("50%"),
        StaticElement::new(2, 40.0, 40.0),
        StaticElement::new(3, 96.0, 40.0).with_border_radius("8px"),
        StaticElement::new(4, 120.0, 36.0).with_border_radius("999px"),
    ];

    for mut el in samples {
        borders.create_progress_border(&mut el, 65.0, GREEN, GREY, &BorderOptions::default());
        borders.run_animation_frames();
        let markup = borders.markup(el.id).unwrap();
        let tree = usvg::Tree::from_str(&markup, &usvg::Options::default());
        assert!(tree.is_ok(), "{:?}: {:?}\n{markup}", el.id, tree.err());
    }
}
