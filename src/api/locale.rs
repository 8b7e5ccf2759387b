use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::WEEKDAY_COUNT;
use crate::error::{PunchCardError, PunchCardResult};

/// Localization seam mapping a weekday to its display name.
///
/// The punch card itself is locale-agnostic; hosts plug in their own
/// translation source here.
pub trait WeekdayNames {
    fn name(&self, weekday: Weekday) -> &str;
}

/// Default English weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnglishWeekdayNames;

impl WeekdayNames for EnglishWeekdayNames {
    fn name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Caller-supplied weekday names, Monday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWeekdayNames {
    names: [String; WEEKDAY_COUNT],
}

impl CustomWeekdayNames {
    pub fn new(names: [String; WEEKDAY_COUNT]) -> PunchCardResult<Self> {
        if names.iter().any(|name| name.is_empty()) {
            return Err(PunchCardError::InvalidData(
                "weekday names must not be empty".to_owned(),
            ));
        }
        Ok(Self { names })
    }
}

impl WeekdayNames for CustomWeekdayNames {
    fn name(&self, weekday: Weekday) -> &str {
        &self.names[weekday.num_days_from_monday() as usize]
    }
}
