//! Shift input and persisted shift record types.
//!
//! A [`ShiftInput`] is what the worker enters: a calendar date plus local
//! start and end times of day. A [`ShiftRecord`] is the row a caller stores
//! once the shift has been calculated.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::ShiftCalculation;

/// A worked shift as entered: a date and two local times of day.
///
/// When `end_time` is earlier than `start_time` the shift crosses midnight
/// and ends on the following calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The calendar day the shift starts on.
    pub date: NaiveDate,
    /// Local time the shift starts.
    pub start_time: NaiveTime,
    /// Local time the shift ends.
    pub end_time: NaiveTime,
}

impl ShiftInput {
    /// Parses a shift from `HH:MM` times and a `YYYY-MM-DD` date.
    ///
    /// `HH:MM:SS` is accepted as well, which is how stored rows come back.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::models::ShiftInput;
    ///
    /// let shift = ShiftInput::parse("22:00", "06:00", "2026-01-14").unwrap();
    /// assert!(shift.crosses_midnight());
    /// assert!(ShiftInput::parse("", "06:00", "2026-01-14").is_err());
    /// ```
    pub fn parse(start_time: &str, end_time: &str, date: &str) -> EngineResult<Self> {
        Ok(Self {
            date: parse_date(date)?,
            start_time: parse_time("start_time", start_time)?,
            end_time: parse_time("end_time", end_time)?,
        })
    }

    /// Returns true if the shift ends on the day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// The local instant the shift starts.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// The local instant the shift ends, one day later for overnight shifts.
    pub fn end_instant(&self) -> NaiveDateTime {
        let end = self.date.and_time(self.end_time);
        if self.crosses_midnight() {
            end + Duration::days(1)
        } else {
            end
        }
    }

    /// Elapsed wall-clock hours between start and end.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::models::ShiftInput;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftInput::parse("09:00", "17:30", "2026-01-14").unwrap();
    /// assert_eq!(shift.elapsed_hours(), Decimal::new(85, 1));
    /// ```
    pub fn elapsed_hours(&self) -> Decimal {
        hours_between(self.start_instant(), self.end_instant())
    }
}

/// Hours from `start` to `end`, zero when `end` is not after `start`.
pub(crate) fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds().max(0);
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

/// Parses a `YYYY-MM-DD` date.
///
/// The following day must also be representable, since an overnight shift
/// and the night window both end on it.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| date.succ_opt().is_some())
        .ok_or_else(|| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Parses an `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// A calculated shift as a caller would persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the stored shift.
    pub id: Uuid,
    /// The job the shift was worked for.
    pub job_id: String,
    /// The calendar day the shift starts on.
    pub date: NaiveDate,
    /// Local start time.
    pub start_time: NaiveTime,
    /// Local end time.
    pub end_time: NaiveTime,
    /// Elapsed hours of the shift.
    pub duration_hours: Decimal,
    /// The earnings calculated for the shift.
    pub calculation: ShiftCalculation,
}
