use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use geoclock_rs::api::{ChartEngine, ChartEngineConfig};
use geoclock_rs::core::clock::{ClockScale, HOUR_ANCHORS};
use geoclock_rs::core::{RadialGeometry, Viewport, dataset};
use geoclock_rs::extensions::{ClockLabelsConfig, ClockLabelsOverlay, LabelSide, label_side};
use geoclock_rs::render::{NullRenderer, RenderFrame, TextHAlign, TextPrimitive};
use proptest::prelude::*;

fn default_frame() -> RenderFrame {
    let config = ChartEngineConfig::new(Viewport::new(800, 800));
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.build_frame().expect("frame build")
}

fn find_text<'a>(frame: &'a RenderFrame, text: &str) -> &'a TextPrimitive {
    frame
        .texts
        .iter()
        .find(|primitive| primitive.text == text)
        .unwrap_or_else(|| panic!("text `{text}` missing from frame"))
}

#[test]
fn frame_carries_wedges_spokes_and_labels() {
    let frame = default_frame();

    // 7 era wedges, 15 event spokes, 4 hour labels + 15 event labels.
    assert_eq!(frame.wedges.len(), 7);
    assert_eq!(frame.lines.len(), 15);
    assert_eq!(frame.texts.len(), 19);
}

#[test]
fn hour_labels_sit_on_the_outer_ring() {
    let frame = default_frame();
    let geometry =
        RadialGeometry::from_viewport(Viewport::new(800, 800)).expect("valid geometry");

    for anchor in HOUR_ANCHORS {
        let label = find_text(&frame, &anchor.hour.to_string());
        let (x, y) = geometry.point_at(anchor.angle, geometry.outer_radius);
        assert_abs_diff_eq!(label.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(label.y, y, epsilon = 1e-9);
        assert_eq!(label.h_align, TextHAlign::Center);
        assert_abs_diff_eq!(label.rotation_radians, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(label.font_size_px, 16.0, epsilon = 1e-12);
    }
}

#[test]
fn event_spokes_span_inner_to_outer_radius() {
    let frame = default_frame();
    let geometry =
        RadialGeometry::from_viewport(Viewport::new(800, 800)).expect("valid geometry");
    let events = dataset::event_list().expect("valid event list");
    let scale = ClockScale::new();

    assert_abs_diff_eq!(
        geometry.inner_radius,
        geometry.outer_radius * 0.7,
        epsilon = 1e-12
    );

    for (line, event) in frame.lines.iter().zip(events.events()) {
        let angle = scale.angle_of(event.time_hours).expect("event angle");
        let (x_inner, y_inner) = geometry.point_at(angle, geometry.inner_radius);
        let (x_outer, y_outer) = geometry.point_at(angle, geometry.outer_radius);

        assert_abs_diff_eq!(line.x1, x_inner, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y1, y_inner, epsilon = 1e-9);
        assert_abs_diff_eq!(line.x2, x_outer, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y2, y_outer, epsilon = 1e-9);
        assert_abs_diff_eq!(line.stroke_width, 2.0, epsilon = 1e-12);
        assert_eq!(line.color, event.color);
    }
}

#[test]
fn spoke_labels_rotate_with_their_spoke_and_clear_the_line() {
    let frame = default_frame();
    let geometry =
        RadialGeometry::from_viewport(Viewport::new(800, 800)).expect("valid geometry");
    let scale = ClockScale::new();

    // Cambrian Explosion at 21.42 h lands in the circle's left half, so
    // its text grows leftward from an anchor pulled 10 px inward along
    // the spoke direction.
    let label = find_text(&frame, "Cambrian Explosion");
    let angle = scale.angle_of(21.42).expect("angle of cambrian");
    let (x_outer, y_outer) = geometry.point_at(angle, geometry.outer_radius);

    assert_eq!(label.h_align, TextHAlign::Right);
    assert_abs_diff_eq!(label.rotation_radians, angle, epsilon = 1e-12);
    assert_abs_diff_eq!(label.x, x_outer - 10.0 * angle.cos(), epsilon = 1e-9);
    assert_abs_diff_eq!(label.y, y_outer - 10.0 * angle.sin(), epsilon = 1e-9);
    assert_abs_diff_eq!(label.font_size_px, 10.0, epsilon = 1e-12);

    // First Evidence of Life at 4.4 h lands in the right half; its anchor
    // is pushed 10 px outward instead.
    let label = find_text(&frame, "First Evidence of Life");
    let angle = scale.angle_of(4.4).expect("angle of first life");
    let (x_outer, y_outer) = geometry.point_at(angle, geometry.outer_radius);

    assert_eq!(label.h_align, TextHAlign::Left);
    assert_abs_diff_eq!(label.x, x_outer + 10.0 * angle.cos(), epsilon = 1e-9);
    assert_abs_diff_eq!(label.y, y_outer + 10.0 * angle.sin(), epsilon = 1e-9);
}

#[test]
fn alignment_flips_only_inside_the_open_interval() {
    assert_eq!(label_side(FRAC_PI_2), LabelSide::Left);
    assert_eq!(label_side(FRAC_PI_2 + 1e-9), LabelSide::Right);
    assert_eq!(label_side(3.0 * FRAC_PI_2 - 1e-9), LabelSide::Right);
    assert_eq!(label_side(3.0 * FRAC_PI_2), LabelSide::Left);
    assert_eq!(label_side(0.0), LabelSide::Left);
    assert_eq!(label_side(-FRAC_PI_2), LabelSide::Left);
}

#[test]
fn overlay_can_be_disabled() {
    let config = ChartEngineConfig::new(Viewport::new(800, 800)).with_clock_labels(false);
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let frame = engine.build_frame().expect("frame build");

    assert_eq!(frame.wedges.len(), 7);
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
}

#[test]
fn non_positive_overlay_tuning_is_rejected() {
    let events = dataset::event_list().expect("valid event list");
    let config = ClockLabelsConfig {
        spoke_width_px: 0.0,
        ..ClockLabelsConfig::default()
    };
    assert!(ClockLabelsOverlay::new(events, config).is_err());
}

proptest! {
    #[test]
    fn label_side_matches_the_interval_predicate(time in 0.0f64..24.0) {
        let angle = ClockScale::new().angle_of(time).expect("angle of time");
        let expected = if angle > FRAC_PI_2 && angle < 3.0 * FRAC_PI_2 {
            LabelSide::Right
        } else {
            LabelSide::Left
        };
        prop_assert_eq!(label_side(angle), expected);
    }
}
