use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of weekday columns on a punch card. Fixed by design.
pub const WEEKDAY_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One dated duration record, as supplied by the caller.
///
/// The date is a calendar date only (`YYYY-MM-DD`); no time-of-day or timezone
/// is attached. Events are consumed read-only during aggregation and never
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: String,
    pub minutes: u32,
}

impl Event {
    #[must_use]
    pub fn new(date: impl Into<String>, minutes: u32) -> Self {
        Self {
            date: date.into(),
            minutes,
        }
    }

    /// Builds an event from an already-parsed calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate, minutes: u32) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            minutes,
        }
    }
}
