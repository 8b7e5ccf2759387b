#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use punchcard_rs::api::{EnglishWeekdayNames, PunchCardStyle, build_punch_card_frame};
use punchcard_rs::core::{
    PUNCH_CARD_HEIGHT, PUNCH_CARD_WIDTH, Viewport, WEEKDAY_COUNT, WeeklyProfile,
};
use punchcard_rs::render::{CairoContextRenderer, CairoRenderer, Color, RenderFrame, Renderer};

fn scenario_frame() -> RenderFrame {
    build_punch_card_frame(
        &WeeklyProfile::from_totals([60, 30, 0, 0, 0, 0, 0]),
        Viewport::new(PUNCH_CARD_WIDTH, PUNCH_CARD_HEIGHT),
        &PunchCardStyle::default(),
        &EnglishWeekdayNames,
    )
    .expect("build frame")
}

#[test]
fn offscreen_render_counts_drawn_primitives() {
    let mut renderer = CairoRenderer::new(600, 150).expect("cairo renderer");
    assert_eq!(renderer.backend_name(), "cairo+pango+pangocairo");
    renderer.render(&scenario_frame()).expect("render frame");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 1 + WEEKDAY_COUNT);
    assert_eq!(stats.texts_drawn, WEEKDAY_COUNT);
    // Only Monday and Tuesday hold activity; degenerate holes paint nothing.
    assert_eq!(stats.circles_drawn, 2);
}

#[test]
fn external_context_render_matches_offscreen_render() {
    let frame = scenario_frame();

    let mut offscreen = CairoRenderer::new(600, 150).expect("offscreen renderer");
    offscreen.render(&frame).expect("offscreen render");
    let mut offscreen_bytes = Vec::new();
    offscreen
        .surface()
        .write_to_png(&mut offscreen_bytes)
        .expect("encode offscreen png");

    let external_surface =
        ImageSurface::create(Format::ARgb32, 600, 150).expect("external surface");
    let context = Context::new(&external_surface).expect("external context");
    let mut on_context = CairoRenderer::new(600, 150).expect("context renderer");
    on_context
        .render_on_cairo_context(&context, &frame)
        .expect("render on external context");
    drop(context);

    let mut external_bytes = Vec::new();
    external_surface
        .write_to_png(&mut external_bytes)
        .expect("encode external png");

    assert_eq!(offscreen_bytes, external_bytes);
}

#[test]
fn renderer_rejects_degenerate_surface_sizes() {
    assert!(CairoRenderer::new(0, 150).is_err());
    assert!(CairoRenderer::new(600, -1).is_err());
}

#[test]
fn clear_color_must_be_a_valid_color() {
    let mut renderer = CairoRenderer::new(600, 150).expect("cairo renderer");
    assert!(renderer.set_clear_color(Color::rgb(2.0, 0.0, 0.0)).is_err());
    assert!(renderer.set_clear_color(Color::rgb(0.2, 0.2, 0.2)).is_ok());
    assert_eq!(renderer.clear_color(), Color::rgb(0.2, 0.2, 0.2));
}

#[test]
fn invalid_frame_is_rejected_before_drawing() {
    let mut frame = scenario_frame();
    frame.circles[0].radius = f64::NAN;

    let mut renderer = CairoRenderer::new(600, 150).expect("cairo renderer");
    assert!(renderer.render(&frame).is_err());
}
