//! Pay period model.
//!
//! A [`PayPeriod`] is an inclusive date range used to group calculated shifts,
//! typically a calendar month or a Sunday-to-Saturday week.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use shift_earnings::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::month_of(NaiveDate::from_ymd_opt(2026, 2, 11).unwrap());
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start_date = date - Days::new(u64::from(date.day0()));
        let end_date = start_date
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        Self {
            start_date,
            end_date,
        }
    }

    /// The Sunday-to-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let start_date = date - Days::new(u64::from(date.weekday().num_days_from_sunday()));
        let end_date = start_date
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX);

        Self {
            start_date,
            end_date,
        }
    }
}
