//! Shift earnings calculation.
//!
//! This module ties the individual rules together into the full calculation
//! for one shift: interval resolution, Shabbat classification, the overtime
//! split and night window (regular shifts only), transport, earnings and the
//! display breakdown.

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::TransportPolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, BreakdownLine, Job, ShiftCalculation, ShiftInput, ShiftRecord};

use super::night_shift::calculate_night_hours;
use super::overtime::split_overtime;
use super::shabbat::{ShiftClassification, detect_shabbat};
use super::shift_interval::resolve_interval;
use super::transport::calculate_transport;

/// Calculates the earnings of a shift given as strings.
///
/// `start_time` and `end_time` are `HH:MM` local times and `date` is
/// `YYYY-MM-DD`. The statutory transport policy is used.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidTime`] or
/// [`crate::error::EngineError::InvalidDate`] when an input does not parse.
/// The job is used as given and never validated here.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::calculate;
/// use shift_earnings::models::Job;
/// use rust_decimal::Decimal;
///
/// // Wednesday, 10 hours of daytime work
/// let result = calculate("08:00", "18:00", "2026-01-14", &Job::default()).unwrap();
///
/// assert_eq!(result.base_hours, Decimal::new(8, 0));
/// assert_eq!(result.overtime_hours, Decimal::new(2, 0));
/// // 8 * 35 + 2 * 52.5 + 30 transport
/// assert_eq!(result.total_earnings, Decimal::new(415, 0));
/// ```
pub fn calculate(
    start_time: &str,
    end_time: &str,
    date: &str,
    job: &Job,
) -> EngineResult<ShiftCalculation> {
    let shift = ShiftInput::parse(start_time, end_time, date)?;
    Ok(calculate_shift_earnings(
        &shift,
        job,
        &TransportPolicy::default(),
    ))
}

/// Calculates the earnings of a parsed shift.
///
/// This never fails. Zero-length shifts and zero rates produce zero-valued
/// fields.
pub fn calculate_shift_earnings(
    shift: &ShiftInput,
    job: &Job,
    policy: &TransportPolicy,
) -> ShiftCalculation {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let interval_result = resolve_interval(shift, step_number);
    let interval = interval_result.interval;
    audit_steps.push(interval_result.audit_step);
    step_number += 1;

    let total_hours = interval.elapsed_hours;

    let shabbat_result = detect_shabbat(interval.start, step_number);
    audit_steps.push(shabbat_result.audit_step);
    step_number += 1;

    let is_shabbat = shabbat_result.classification == ShiftClassification::Shabbat;

    let (base_hours, overtime_hours, shabbat_hours, night_hours) = if is_shabbat {
        (Decimal::ZERO, Decimal::ZERO, total_hours, Decimal::ZERO)
    } else {
        let split = split_overtime(total_hours, job.overtime_after, step_number);
        audit_steps.push(split.audit_step);
        step_number += 1;

        let night = calculate_night_hours(interval.start, interval.end, step_number);
        audit_steps.push(night.audit_step);
        step_number += 1;

        (
            split.base_hours,
            split.overtime_hours,
            Decimal::ZERO,
            night.night_hours,
        )
    };

    let transport_result = calculate_transport(job, policy, step_number);
    let transport_cost = transport_result.transport_cost;
    audit_steps.push(transport_result.audit_step);

    let base_earnings = base_hours * job.base_rate;
    let overtime_earnings = overtime_hours * job.overtime_rate;
    let shabbat_earnings = shabbat_hours * job.shabbat_rate;
    let night_bonus = night_hours * job.base_rate * (job.night_shift_bonus / Decimal::ONE_HUNDRED);

    let total_earnings =
        base_earnings + overtime_earnings + shabbat_earnings + night_bonus + transport_cost;

    let mut breakdown = Vec::new();
    if base_hours > Decimal::ZERO {
        breakdown.push(BreakdownLine::regular(base_hours, base_earnings));
    }
    if overtime_hours > Decimal::ZERO {
        breakdown.push(BreakdownLine::overtime(overtime_hours, overtime_earnings));
    }
    if shabbat_hours > Decimal::ZERO {
        breakdown.push(BreakdownLine::shabbat(shabbat_hours, shabbat_earnings));
    }
    if night_hours > Decimal::ZERO {
        breakdown.push(BreakdownLine::night_bonus(
            night_hours,
            night_bonus,
            job.night_shift_bonus,
        ));
    }
    if transport_cost > Decimal::ZERO {
        breakdown.push(BreakdownLine::transport(transport_cost));
    }

    debug!(
        date = %shift.date,
        job_id = %job.id,
        total_hours = %total_hours.normalize(),
        is_shabbat,
        total_earnings = %total_earnings.normalize(),
        "Calculated shift earnings"
    );

    ShiftCalculation {
        total_hours,
        is_shabbat,
        base_hours,
        overtime_hours,
        shabbat_hours,
        night_hours,
        transport_cost,
        base_earnings,
        overtime_earnings,
        shabbat_earnings,
        night_bonus,
        total_earnings,
        breakdown,
        audit_steps,
    }
}

/// Calculates a shift and wraps it in a record ready to be stored.
pub fn record_shift(job: &Job, shift: &ShiftInput, policy: &TransportPolicy) -> ShiftRecord {
    let calculation = calculate_shift_earnings(shift, job, policy);

    ShiftRecord {
        id: Uuid::new_v4(),
        job_id: job.id.clone(),
        date: shift.date,
        start_time: shift.start_time,
        end_time: shift.end_time,
        duration_hours: calculation.total_hours,
        calculation,
    }
}
