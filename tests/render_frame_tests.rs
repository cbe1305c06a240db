use geoclock_rs::ClockError;
use geoclock_rs::core::{RadialGeometry, Viewport};
use geoclock_rs::render::{
    Color, LinePrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    WedgePrimitive,
};

#[test]
fn empty_frame_with_valid_viewport_passes() {
    let frame = RenderFrame::new(Viewport::new(640, 480));
    assert!(frame.is_empty());
    frame.validate().expect("valid frame");
}

#[test]
fn invalid_viewport_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 480));
    let err = frame.validate().expect_err("invalid viewport must fail");
    assert!(matches!(err, ClockError::InvalidViewport { .. }));
}

#[test]
fn nan_line_geometry_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_line(LinePrimitive::new(
        f64::NAN,
        0.0,
        10.0,
        10.0,
        1.0,
        Color::BLACK,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn zero_stroke_width_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        0.0,
        Color::BLACK,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn empty_text_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        12.0,
        Color::BLACK,
        TextHAlign::Left,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn non_finite_text_rotation_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_text(
        TextPrimitive::new("label", 10.0, 10.0, 12.0, Color::BLACK, TextHAlign::Left)
            .with_rotation(f64::NAN),
    );
    assert!(frame.validate().is_err());
}

#[test]
fn reversed_wedge_angles_are_rejected() {
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_wedge(WedgePrimitive::new(
        320.0,
        240.0,
        100.0,
        1.0,
        0.5,
        Color::WHITE,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn out_of_range_color_channel_is_rejected() {
    assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
    assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
    Color::from_rgb8(0xff, 0xdc, 0x00)
        .validate()
        .expect("8-bit colors are always in range");
}

#[test]
fn null_renderer_rejects_invalid_frames_and_counts_valid_ones() {
    let mut renderer = NullRenderer::default();

    let bad = RenderFrame::new(Viewport::new(640, 480)).with_line(LinePrimitive::new(
        f64::INFINITY,
        0.0,
        1.0,
        1.0,
        1.0,
        Color::BLACK,
    ));
    assert!(renderer.render(&bad).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let good = RenderFrame::new(Viewport::new(640, 480))
        .with_wedge(WedgePrimitive::new(
            320.0,
            240.0,
            100.0,
            0.0,
            1.0,
            Color::WHITE,
        ))
        .with_text(TextPrimitive::new(
            "6",
            10.0,
            10.0,
            16.0,
            Color::BLACK,
            TextHAlign::Center,
        ));
    renderer.render(&good).expect("valid frame renders");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_wedge_count, 1);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_line_count, 0);
}

#[test]
fn radial_geometry_guards_degenerate_values() {
    let geometry = RadialGeometry::from_viewport(Viewport::new(800, 600)).expect("geometry");
    assert_eq!(geometry.center_x, 400.0);
    assert_eq!(geometry.center_y, 300.0);
    assert_eq!(geometry.outer_radius, 300.0);
    geometry.validate().expect("derived geometry is valid");

    let poisoned = RadialGeometry {
        outer_radius: f64::NAN,
        ..geometry
    };
    assert!(poisoned.validate().is_err());

    let inverted = RadialGeometry {
        inner_radius: geometry.outer_radius + 1.0,
        ..geometry
    };
    assert!(inverted.validate().is_err());

    assert!(RadialGeometry::from_viewport(Viewport::new(0, 600)).is_err());
}
