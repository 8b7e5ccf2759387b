use serde::{Deserialize, Serialize};

use crate::error::{PunchCardError, PunchCardResult};
use crate::render::Color;

/// Visual style of one punch card.
///
/// This type is serializable so host applications can persist/load their setup
/// without inventing their own ad-hoc format. The defaults produce the stock
/// card: white background, light gray grid, gray labels and holes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PunchCardStyle {
    pub background_color: Color,
    pub grid_color: Color,
    pub label_color: Color,
    pub hole_color: Color,
    pub label_font_size_px: f64,
    pub grid_stroke_width_px: f64,
}

impl Default for PunchCardStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            grid_color: Color::rgb(0.75, 0.75, 0.75),
            label_color: Color::rgb(0.5, 0.5, 0.5),
            hole_color: Color::rgb(0.5, 0.5, 0.5),
            label_font_size_px: 12.0,
            grid_stroke_width_px: 1.0,
        }
    }
}

impl PunchCardStyle {
    pub fn validate(&self) -> PunchCardResult<()> {
        self.background_color.validate()?;
        self.grid_color.validate()?;
        self.label_color.validate()?;
        self.hole_color.validate()?;

        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(PunchCardError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.grid_stroke_width_px.is_finite() || self.grid_stroke_width_px <= 0.0 {
            return Err(PunchCardError::InvalidData(
                "grid stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
