use crate::core::types::{Viewport, WEEKDAY_COUNT};
use crate::error::{PunchCardError, PunchCardResult};

/// Default punch-card canvas width in pixels.
pub const PUNCH_CARD_WIDTH: u32 = 600;
/// Default punch-card canvas height in pixels.
pub const PUNCH_CARD_HEIGHT: u32 = 150;

const BASELINE_OFFSET_PX: f64 = 50.0;
const TICK_TOP_OFFSET_PX: f64 = 75.0;
const LABEL_TOP_OFFSET_PX: f64 = 25.0;
const MARKER_BAND_HEIGHT_PX: f64 = 75.0;
const MAX_HOLE_DIAMETER_PX: f64 = 50.0;

/// Deterministic punch-card geometry over one viewport.
///
/// The canvas is divided into 14 half-slots; each of the 7 weekday columns is
/// centered on an odd half-slot multiple. Markers live in a fixed-height band
/// at the top, the grid baseline and weekday labels sit below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PunchCardLayout {
    width: f64,
    height: f64,
}

impl PunchCardLayout {
    pub fn new(viewport: Viewport) -> PunchCardResult<Self> {
        if !viewport.is_valid() {
            return Err(PunchCardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let height = f64::from(viewport.height);
        if height < TICK_TOP_OFFSET_PX {
            return Err(PunchCardError::InvalidData(format!(
                "viewport height {height} is too short for the punch card grid"
            )));
        }

        Ok(Self {
            width: f64::from(viewport.width),
            height,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half-slot width: the canvas is split into `2 * 7` half-slots.
    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.width / (2 * WEEKDAY_COUNT) as f64
    }

    /// Horizontal midpoint of a weekday column: odd multiples of the half-slot.
    #[must_use]
    pub fn column_center_x(&self, column: usize) -> f64 {
        (2 * column + 1) as f64 * self.slot_width()
    }

    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.height - BASELINE_OFFSET_PX
    }

    #[must_use]
    pub fn tick_top_y(&self) -> f64 {
        self.height - TICK_TOP_OFFSET_PX
    }

    #[must_use]
    pub fn label_top_y(&self) -> f64 {
        self.height - LABEL_TOP_OFFSET_PX
    }

    #[must_use]
    pub fn marker_band_height(&self) -> f64 {
        MARKER_BAND_HEIGHT_PX
    }

    /// Vertical midpoint of the marker band; every hole is centered here.
    #[must_use]
    pub fn hole_center_y(&self) -> f64 {
        MARKER_BAND_HEIGHT_PX / 2.0
    }

    /// Hole diameter for a weekday share. A full share draws the maximum
    /// diameter, a zero share a degenerate invisible hole.
    #[must_use]
    pub fn hole_diameter(&self, percentage: f64) -> f64 {
        MAX_HOLE_DIAMETER_PX * percentage.clamp(0.0, 1.0)
    }
}
