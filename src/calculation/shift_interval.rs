//! Shift interval resolution.
//!
//! Combines a shift's date and local times into two explicit local instants,
//! advancing the end by one calendar day when the shift crosses midnight.
//! No time zone is involved, so daylight-saving transitions do not change
//! the elapsed hours.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ShiftInput};

/// The resolved start and end instants of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Local instant the shift starts.
    pub start: NaiveDateTime,
    /// Local instant the shift ends.
    pub end: NaiveDateTime,
    /// Whether the end was moved to the following day.
    pub crosses_midnight: bool,
    /// Elapsed wall-clock hours between start and end.
    pub elapsed_hours: Decimal,
}

/// The result of resolving a shift interval, including the audit step.
#[derive(Debug, Clone)]
pub struct ShiftIntervalResult {
    /// The resolved interval.
    pub interval: ShiftInterval,
    /// The audit step recording the resolution.
    pub audit_step: AuditStep,
}

/// Resolves the instants and elapsed hours of a shift.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::resolve_interval;
/// use shift_earnings::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::parse("22:00", "06:00", "2026-01-14").unwrap();
/// let result = resolve_interval(&shift, 1);
///
/// assert!(result.interval.crosses_midnight);
/// assert_eq!(result.interval.elapsed_hours, Decimal::new(8, 0));
/// ```
pub fn resolve_interval(shift: &ShiftInput, step_number: u32) -> ShiftIntervalResult {
    let start = shift.start_instant();
    let end = shift.end_instant();
    let crosses_midnight = shift.crosses_midnight();
    let elapsed_hours = shift.elapsed_hours();

    let reasoning = if crosses_midnight {
        format!(
            "End time {} is before start time {}, shift ends the next day after {} hours",
            shift.end_time.format("%H:%M"),
            shift.start_time.format("%H:%M"),
            elapsed_hours.normalize()
        )
    } else {
        format!(
            "Shift runs {} to {} on {}, {} hours",
            shift.start_time.format("%H:%M"),
            shift.end_time.format("%H:%M"),
            shift.date,
            elapsed_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_interval".to_string(),
        rule_name: "Shift Interval".to_string(),
        input: serde_json::json!({
            "date": shift.date.to_string(),
            "start_time": shift.start_time.format("%H:%M").to_string(),
            "end_time": shift.end_time.format("%H:%M").to_string()
        }),
        output: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
            "crosses_midnight": crosses_midnight,
            "elapsed_hours": elapsed_hours.normalize().to_string()
        }),
        reasoning,
    };

    ShiftIntervalResult {
        interval: ShiftInterval {
            start,
            end,
            crosses_midnight,
            elapsed_hours,
        },
        audit_step,
    }
}
