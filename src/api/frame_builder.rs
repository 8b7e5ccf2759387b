use crate::core::{PunchCardLayout, Viewport, WEEKDAY_COUNT, WeeklyProfile, weekday_from_index};
use crate::error::PunchCardResult;
use crate::render::{CirclePrimitive, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{PunchCardStyle, WeekdayNames};

/// Materializes one weekly profile into a deterministic punch-card scene.
///
/// Primitives are emitted in draw order: grid (baseline then one tick per
/// column), weekday labels, punch holes. The background layer is the backend's
/// clear color, so it carries no primitive of its own.
pub fn build_punch_card_frame(
    profile: &WeeklyProfile,
    viewport: Viewport,
    style: &PunchCardStyle,
    names: &impl WeekdayNames,
) -> PunchCardResult<RenderFrame> {
    style.validate()?;
    let layout = PunchCardLayout::new(viewport)?;

    let mut frame = RenderFrame::new(viewport);

    frame.lines.push(LinePrimitive::new(
        0.0,
        layout.baseline_y(),
        layout.width(),
        layout.baseline_y(),
        style.grid_stroke_width_px,
        style.grid_color,
    ));
    for column in 0..WEEKDAY_COUNT {
        let x = layout.column_center_x(column);
        frame.lines.push(LinePrimitive::new(
            x,
            layout.baseline_y(),
            x,
            layout.tick_top_y(),
            style.grid_stroke_width_px,
            style.grid_color,
        ));
    }

    for column in 0..WEEKDAY_COUNT {
        let Some(weekday) = weekday_from_index(column) else {
            continue;
        };
        frame.texts.push(TextPrimitive::new(
            names.name(weekday),
            layout.column_center_x(column),
            layout.label_top_y(),
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    for column in 0..WEEKDAY_COUNT {
        let diameter = layout.hole_diameter(profile.percentage_of(column));
        frame.circles.push(CirclePrimitive::new(
            layout.column_center_x(column),
            layout.hole_center_y(),
            diameter / 2.0,
            style.hole_color,
        ));
    }

    Ok(frame)
}
