//! Overtime split functionality.
//!
//! This module splits the elapsed hours of a regular (non-Shabbat) shift into
//! hours paid at the base rate and hours paid at the overtime rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Default number of hours after which overtime starts.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The split of a shift's hours between the base and overtime rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub base_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Splits `total_hours` at `threshold`.
///
/// `base_hours + overtime_hours` always equals `total_hours`. A negative
/// threshold is treated as zero so both buckets stay non-negative.
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::{split_overtime, DEFAULT_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = split_overtime(Decimal::from_str("10").unwrap(), DEFAULT_OVERTIME_THRESHOLD, 1);
/// assert_eq!(result.base_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("2").unwrap());
///
/// let result = split_overtime(Decimal::from_str("6").unwrap(), DEFAULT_OVERTIME_THRESHOLD, 1);
/// assert_eq!(result.base_hours, Decimal::from_str("6").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_overtime(total_hours: Decimal, threshold: Decimal, step_number: u32) -> OvertimeSplit {
    let threshold = threshold.max(Decimal::ZERO);

    let base_hours = total_hours.min(threshold);
    let overtime_hours = (total_hours - threshold).max(Decimal::ZERO);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours, triggering overtime",
            total_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else if total_hours == threshold {
        format!(
            "{} hours worked equals {} hour threshold, no overtime triggered",
            total_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour threshold, no overtime triggered",
            total_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_split".to_string(),
        rule_name: "Overtime Split".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_hours": base_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    OvertimeSplit {
        base_hours,
        overtime_hours,
        audit_step,
    }
}
