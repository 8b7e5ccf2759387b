use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::core::types::{Event, WEEKDAY_COUNT};
use crate::error::{PunchCardError, PunchCardResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-weekday activity totals for one render pass.
///
/// Totals are ordered Monday-first and the array length never changes. The
/// profile is rebuilt from the full event list on every render and discarded
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyProfile {
    totals: [u64; WEEKDAY_COUNT],
    max_total: u64,
}

/// Outcome of a lenient aggregation pass: accepted totals plus every record
/// that was skipped because its date failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    pub profile: WeeklyProfile,
    pub rejected: Vec<RejectedEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    pub index: usize,
    pub date: String,
    pub reason: String,
}

impl WeeklyProfile {
    /// Builds a profile directly from known per-weekday totals, Monday-first.
    #[must_use]
    pub fn from_totals(totals: [u64; WEEKDAY_COUNT]) -> Self {
        let max_total = totals.iter().copied().max().unwrap_or(0);
        Self { totals, max_total }
    }

    /// Aggregates the full event list into per-weekday minute totals.
    ///
    /// Any event whose date cannot be parsed aborts the whole aggregation;
    /// use [`WeeklyProfile::from_events_lenient`] to skip bad records instead.
    pub fn from_events(events: &[Event]) -> PunchCardResult<Self> {
        let mut totals = [0u64; WEEKDAY_COUNT];
        for event in events {
            let index = weekday_index_of(&event.date)?;
            totals[index] += u64::from(event.minutes);
        }

        let profile = Self::from_totals(totals);
        debug!(
            event_count = events.len(),
            max_total = profile.max_total,
            "aggregated weekly profile"
        );
        Ok(profile)
    }

    /// Aggregates like [`WeeklyProfile::from_events`] but skips records with
    /// malformed dates, reporting them instead of failing the whole pass.
    #[must_use]
    pub fn from_events_lenient(events: &[Event]) -> AggregationReport {
        let mut totals = [0u64; WEEKDAY_COUNT];
        let mut rejected = Vec::new();
        for (index, event) in events.iter().enumerate() {
            match weekday_index_of(&event.date) {
                Ok(weekday_index) => totals[weekday_index] += u64::from(event.minutes),
                Err(err) => {
                    warn!(
                        index,
                        date = %event.date,
                        error = %err,
                        "skipping event with malformed date"
                    );
                    rejected.push(RejectedEvent {
                        index,
                        date: event.date.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        AggregationReport {
            profile: Self::from_totals(totals),
            rejected,
        }
    }

    #[must_use]
    pub fn totals(&self) -> [u64; WEEKDAY_COUNT] {
        self.totals
    }

    #[must_use]
    pub fn max_total(&self) -> u64 {
        self.max_total
    }

    /// Share of the busiest weekday's total held by the given weekday column.
    ///
    /// Always in `[0, 1]`. An out-of-range index and an all-zero profile both
    /// yield `0.0` rather than an error or a division by zero.
    #[must_use]
    pub fn percentage_of(&self, weekday_index: usize) -> f64 {
        if weekday_index >= WEEKDAY_COUNT || self.max_total == 0 {
            return 0.0;
        }
        self.totals[weekday_index] as f64 / self.max_total as f64
    }

    #[must_use]
    pub fn percentage_of_weekday(&self, weekday: Weekday) -> f64 {
        self.percentage_of(weekday.num_days_from_monday() as usize)
    }

    /// The weekday holding the largest total. Ties resolve Monday-first.
    #[must_use]
    pub fn busiest_weekday(&self) -> Weekday {
        let mut best = 0usize;
        for (index, total) in self.totals.iter().enumerate() {
            if *total > self.totals[best] {
                best = index;
            }
        }
        weekday_from_index(best).unwrap_or(Weekday::Mon)
    }
}

/// Maps a Monday-first column index to its weekday, `None` outside `[0, 6]`.
#[must_use]
pub fn weekday_from_index(index: usize) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_index_of(date: &str) -> PunchCardResult<usize> {
    let parsed =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            PunchCardError::MalformedDate {
                date: date.to_owned(),
                source,
            }
        })?;
    Ok(parsed.weekday().num_days_from_monday() as usize)
}
