//! Transport allowance calculation.
//!
//! Each shift is reimbursed for travel once, regardless of its length. Jobs
//! with automatic transport receive the statutory daily allowance, which is a
//! share of the monthly minimum wage spread over the working days of a month
//! with a fixed floor. Other jobs receive their configured flat amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TransportPolicy;
use crate::models::{AuditStep, Job};

/// How the transport amount of a shift was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// The statutory daily allowance.
    Statutory,
    /// The job's configured flat amount.
    Flat,
}

/// The result of calculating transport, including the audit step.
#[derive(Debug, Clone)]
pub struct TransportResult {
    /// The transport reimbursement for the shift.
    pub transport_cost: Decimal,
    /// Which rule produced the amount.
    pub mode: TransportMode,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the statutory daily transport allowance.
///
/// The allowance is `max(minimum_daily, minimum_wage * wage_share / working_days_per_month)`.
/// A policy with zero working days pays the floor.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::statutory_daily_allowance;
/// use shift_earnings::config::TransportPolicy;
/// use rust_decimal::Decimal;
///
/// // 5300 * 0.075 / 22 is about 18.07, below the 30 floor
/// let allowance = statutory_daily_allowance(&TransportPolicy::default());
/// assert_eq!(allowance, Decimal::new(30, 0));
/// ```
pub fn statutory_daily_allowance(policy: &TransportPolicy) -> Decimal {
    (policy.minimum_wage * policy.wage_share)
        .checked_div(policy.working_days_per_month)
        .map_or(policy.minimum_daily, |daily| daily.max(policy.minimum_daily))
}

/// Calculates the transport reimbursement for one shift of `job`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::{calculate_transport, TransportMode};
/// use shift_earnings::config::TransportPolicy;
/// use shift_earnings::models::Job;
/// use rust_decimal::Decimal;
///
/// let job = Job {
///     auto_transport: false,
///     transport_cost: Decimal::new(225, 1),
///     ..Job::default()
/// };
///
/// let result = calculate_transport(&job, &TransportPolicy::default(), 5);
/// assert_eq!(result.mode, TransportMode::Flat);
/// assert_eq!(result.transport_cost, Decimal::new(225, 1));
/// ```
pub fn calculate_transport(job: &Job, policy: &TransportPolicy, step_number: u32) -> TransportResult {
    if !job.auto_transport {
        let audit_step = AuditStep {
            step_number,
            rule_id: "transport_allowance".to_string(),
            rule_name: "Transport Allowance".to_string(),
            input: serde_json::json!({
                "auto_transport": false,
                "transport_cost": job.transport_cost.normalize().to_string()
            }),
            output: serde_json::json!({
                "mode": "flat",
                "transport_cost": job.transport_cost.normalize().to_string()
            }),
            reasoning: format!(
                "Automatic transport disabled, flat ₪{} per shift",
                job.transport_cost.normalize()
            ),
        };

        return TransportResult {
            transport_cost: job.transport_cost,
            mode: TransportMode::Flat,
            audit_step,
        };
    }

    let transport_cost = statutory_daily_allowance(policy);
    let floor_applied = transport_cost == policy.minimum_daily;

    let reasoning = if floor_applied {
        format!(
            "₪{} × {} / {} days is below the daily minimum, ₪{} per shift",
            policy.minimum_wage.normalize(),
            policy.wage_share.normalize(),
            policy.working_days_per_month.normalize(),
            policy.minimum_daily.normalize()
        )
    } else {
        format!(
            "₪{} × {} / {} days = ₪{} per shift",
            policy.minimum_wage.normalize(),
            policy.wage_share.normalize(),
            policy.working_days_per_month.normalize(),
            transport_cost.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "transport_allowance".to_string(),
        rule_name: "Transport Allowance".to_string(),
        input: serde_json::json!({
            "auto_transport": true,
            "minimum_wage": policy.minimum_wage.normalize().to_string(),
            "wage_share": policy.wage_share.normalize().to_string(),
            "working_days_per_month": policy.working_days_per_month.normalize().to_string(),
            "minimum_daily": policy.minimum_daily.normalize().to_string()
        }),
        output: serde_json::json!({
            "mode": "statutory",
            "transport_cost": transport_cost.normalize().to_string(),
            "floor_applied": floor_applied
        }),
        reasoning,
    };

    TransportResult {
        transport_cost,
        mode: TransportMode::Statutory,
        audit_step,
    }
}
