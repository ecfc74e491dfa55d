//! Income aggregation over a pay period.

use tracing::debug;

use crate::models::{IncomeSummary, PayPeriod, ShiftRecord};

/// Sums the calculated shifts dated inside `period`.
///
/// Records outside the period are ignored. The summary's amounts are exact
/// sums of the stored calculations.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::{record_shift, summarize_income};
/// use shift_earnings::config::TransportPolicy;
/// use shift_earnings::models::{Job, PayPeriod, ShiftInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let job = Job::default();
/// let policy = TransportPolicy::default();
/// let records = vec![
///     record_shift(&job, &ShiftInput::parse("09:00", "17:00", "2026-01-14").unwrap(), &policy),
///     record_shift(&job, &ShiftInput::parse("09:00", "17:00", "2026-02-02").unwrap(), &policy),
/// ];
///
/// let period = PayPeriod::month_of(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// let summary = summarize_income(&records, &period);
///
/// assert_eq!(summary.shifts_worked, 1);
/// assert_eq!(summary.total_earnings, Decimal::new(310, 0));
/// ```
pub fn summarize_income(records: &[ShiftRecord], period: &PayPeriod) -> IncomeSummary {
    let mut summary = IncomeSummary::empty(*period);

    for record in records.iter().filter(|r| period.contains_date(r.date)) {
        let calculation = &record.calculation;

        summary.shifts_worked += 1;
        summary.hours_worked += record.duration_hours;
        summary.base_earnings += calculation.base_earnings;
        summary.overtime_earnings += calculation.overtime_earnings;
        summary.shabbat_earnings += calculation.shabbat_earnings;
        summary.night_bonus += calculation.night_bonus;
        summary.transport_total += calculation.transport_cost;
        summary.total_earnings += calculation.total_earnings;
    }

    debug!(
        start_date = %period.start_date,
        end_date = %period.end_date,
        shifts_worked = summary.shifts_worked,
        total_earnings = %summary.total_earnings.normalize(),
        "Summarized income"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::record_shift;
    use crate::config::TransportPolicy;
    use crate::models::{Job, ShiftInput};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(start: &str, end: &str, date: &str) -> ShiftRecord {
        let shift = ShiftInput::parse(start, end, date).unwrap();
        record_shift(&Job::default(), &shift, &TransportPolicy::default())
    }

    // ==========================================================================
    // IS-001: a week with a regular, an overnight and a Shabbat shift
    // ==========================================================================
    #[test]
    fn test_is_001_mixed_week() {
        let records = vec![
            record("08:00", "18:00", "2026-01-12"), // Monday, 2h overtime
            record("22:00", "06:00", "2026-01-14"), // Wednesday night
            record("10:00", "18:00", "2026-01-17"), // Saturday
        ];

        let summary = summarize_income(&records, &PayPeriod::week_of(make_date("2026-01-14")));

        assert_eq!(summary.shifts_worked, 3);
        assert_eq!(summary.hours_worked, dec("26"));
        assert_eq!(summary.base_earnings, dec("560"));
        assert_eq!(summary.overtime_earnings, dec("105"));
        assert_eq!(summary.shabbat_earnings, dec("560"));
        assert_eq!(summary.night_bonus, dec("70"));
        assert_eq!(summary.transport_total, dec("90"));
        assert_eq!(summary.total_earnings, dec("1385"));
    }

    // ==========================================================================
    // IS-002: records outside the period are ignored
    // ==========================================================================
    #[test]
    fn test_is_002_records_outside_period_ignored() {
        let records = vec![
            record("09:00", "17:00", "2026-01-10"), // previous Saturday
            record("09:00", "17:00", "2026-01-11"), // Sunday, first day of week
            record("09:00", "17:00", "2026-01-18"), // next Sunday
        ];

        let summary = summarize_income(&records, &PayPeriod::week_of(make_date("2026-01-14")));

        assert_eq!(summary.shifts_worked, 1);
        assert_eq!(summary.hours_worked, dec("8"));
        assert_eq!(summary.total_earnings, dec("310"));
    }

    #[test]
    fn test_empty_records_give_empty_summary() {
        let period = PayPeriod::month_of(make_date("2026-01-14"));
        let summary = summarize_income(&[], &period);

        assert_eq!(summary, IncomeSummary::empty(period));
    }

    #[test]
    fn test_overnight_shift_counts_in_start_date_period() {
        // Starts on the last day of January, ends in February
        let records = vec![record("22:00", "06:00", "2026-01-31")];

        let january = summarize_income(&records, &PayPeriod::month_of(make_date("2026-01-01")));
        let february = summarize_income(&records, &PayPeriod::month_of(make_date("2026-02-01")));

        assert_eq!(january.shifts_worked, 1);
        assert_eq!(february.shifts_worked, 0);
    }

    #[test]
    fn test_total_matches_sum_of_components() {
        let records = vec![
            record("20:00", "08:00", "2026-01-13"),
            record("18:30", "23:15", "2026-01-16"),
        ];

        let summary = summarize_income(&records, &PayPeriod::month_of(make_date("2026-01-01")));

        assert_eq!(
            summary.total_earnings,
            summary.base_earnings
                + summary.overtime_earnings
                + summary.shabbat_earnings
                + summary.night_bonus
                + summary.transport_total
        );
    }
}
