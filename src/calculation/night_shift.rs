//! Night window overlap.
//!
//! The night window runs from 22:00 on the shift's start date to 06:00 on the
//! following day. The window is anchored to the start date only, so a shift
//! that starts after midnight (for example at 02:00) earns no night hours.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, hours_between};

/// Hour the night window opens on the start date.
pub const NIGHT_WINDOW_START_HOUR: u32 = 22;

/// Hour the night window closes on the following day.
pub const NIGHT_WINDOW_END_HOUR: u32 = 6;

/// The result of measuring night hours, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightHoursResult {
    /// Hours of the shift inside the night window.
    pub night_hours: Decimal,
    /// When the night window opens.
    pub window_start: NaiveDateTime,
    /// When the night window closes.
    pub window_end: NaiveDateTime,
    /// The audit step recording the overlap.
    pub audit_step: AuditStep,
}

/// Returns the night window anchored to the date of `start`.
pub fn night_window(start: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let date = start.date();
    let window_start = date
        .and_hms_opt(NIGHT_WINDOW_START_HOUR, 0, 0)
        .expect("Valid night window start");
    let window_end = (date + Duration::days(1))
        .and_hms_opt(NIGHT_WINDOW_END_HOUR, 0, 0)
        .expect("Valid night window end");
    (window_start, window_end)
}

/// Measures how many hours of `[start, end)` fall inside the night window.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::calculate_night_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-14 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 04:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = calculate_night_hours(start, end, 4);
/// assert_eq!(result.night_hours, Decimal::new(6, 0));
/// ```
pub fn calculate_night_hours(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step_number: u32,
) -> NightHoursResult {
    let (window_start, window_end) = night_window(start);

    let overlap_start = start.max(window_start);
    let overlap_end = end.min(window_end);
    let night_hours = hours_between(overlap_start, overlap_end);

    let reasoning = if night_hours > Decimal::ZERO {
        format!(
            "Overlap {} to {} lies inside the night window, {} night hours",
            overlap_start.format("%H:%M"),
            overlap_end.format("%H:%M"),
            night_hours.normalize()
        )
    } else {
        format!(
            "Shift does not overlap the night window {} to {}",
            window_start.format("%Y-%m-%d %H:%M"),
            window_end.format("%Y-%m-%d %H:%M")
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_window_overlap".to_string(),
        rule_name: "Night Window Overlap".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
            "window_start": window_start.to_string(),
            "window_end": window_end.to_string()
        }),
        output: serde_json::json!({
            "night_hours": night_hours.normalize().to_string()
        }),
        reasoning,
    };

    NightHoursResult {
        night_hours,
        window_start,
        window_end,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    // ==========================================================================
    // NS-001: full night shift 22:00 - 06:00
    // ==========================================================================
    #[test]
    fn test_ns_001_full_night_shift() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "22:00:00"),
            make_datetime("2026-01-15", "06:00:00"),
            4,
        );

        assert_eq!(result.night_hours, dec("8"));
        assert_eq!(result.window_start, make_datetime("2026-01-14", "22:00:00"));
        assert_eq!(result.window_end, make_datetime("2026-01-15", "06:00:00"));
    }

    // ==========================================================================
    // NS-002: day shift has no night hours
    // ==========================================================================
    #[test]
    fn test_ns_002_day_shift_no_night_hours() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "09:00:00"),
            make_datetime("2026-01-14", "17:00:00"),
            4,
        );

        assert_eq!(result.night_hours, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("does not overlap"));
    }

    // ==========================================================================
    // NS-003: evening shift partially inside the window
    // ==========================================================================
    #[test]
    fn test_ns_003_evening_shift_partial_overlap() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "18:00:00"),
            make_datetime("2026-01-15", "00:30:00"),
            4,
        );

        assert_eq!(result.night_hours, dec("2.5"));
    }

    // ==========================================================================
    // NS-004: shift ending after the window closes
    // ==========================================================================
    #[test]
    fn test_ns_004_shift_runs_past_window_end() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "23:00:00"),
            make_datetime("2026-01-15", "09:00:00"),
            4,
        );

        assert_eq!(result.night_hours, dec("7"));
    }

    // ==========================================================================
    // NS-005: shift starting after midnight is outside the start-date window
    // ==========================================================================
    #[test]
    fn test_ns_005_after_midnight_start_has_no_night_hours() {
        let result = calculate_night_hours(
            make_datetime("2026-01-15", "02:00:00"),
            make_datetime("2026-01-15", "06:00:00"),
            4,
        );

        assert_eq!(result.night_hours, Decimal::ZERO);
        assert_eq!(result.window_start, make_datetime("2026-01-15", "22:00:00"));
    }

    #[test]
    fn test_shift_ending_exactly_at_window_start() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "14:00:00"),
            make_datetime("2026-01-14", "22:00:00"),
            4,
        );

        assert_eq!(result.night_hours, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_night_hours() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "21:00:00"),
            make_datetime("2026-01-14", "22:20:00"),
            4,
        );

        assert_eq!(result.night_hours, dec("1") / dec("3"));
    }

    #[test]
    fn test_audit_step_records_window() {
        let result = calculate_night_hours(
            make_datetime("2026-01-14", "20:00:00"),
            make_datetime("2026-01-15", "04:00:00"),
            4,
        );

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "night_window_overlap");
        assert_eq!(result.audit_step.input["window_start"], "2026-01-14 22:00:00");
        assert_eq!(result.audit_step.input["window_end"], "2026-01-15 06:00:00");
        assert_eq!(result.audit_step.output["night_hours"], "6");
    }
}
