pub mod layout;
pub mod profile;
pub mod types;

pub use layout::{PUNCH_CARD_HEIGHT, PUNCH_CARD_WIDTH, PunchCardLayout};
pub use profile::{AggregationReport, RejectedEvent, WeeklyProfile, weekday_from_index};
pub use types::{Event, Viewport, WEEKDAY_COUNT};
