//! Shabbat classification.
//!
//! A shift is paid entirely at the Shabbat rate when it starts on Friday at
//! or after 18:00, or at any time on Saturday. Only the start instant is
//! inspected: a shift starting Friday afternoon stays regular even if it runs
//! into the evening, and a shift starting Saturday night stays Shabbat even if
//! it runs into Sunday. The thresholds are fixed clock times rather than
//! sunset-based.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Hour on Friday from which a starting shift counts as Shabbat.
pub const SHABBAT_EVE_START_HOUR: u32 = 18;

/// How a whole shift is paid.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::ShiftClassification;
///
/// assert_eq!(ShiftClassification::Shabbat.to_string(), "Shabbat");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftClassification {
    /// Regular, overtime and night-bonus rules apply.
    Regular,
    /// Every hour is paid at the Shabbat rate.
    Shabbat,
}

impl std::fmt::Display for ShiftClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftClassification::Regular => write!(f, "Regular"),
            ShiftClassification::Shabbat => write!(f, "Shabbat"),
        }
    }
}

/// Classifies a shift from its start instant.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::{classify_shift, ShiftClassification};
/// use chrono::NaiveDateTime;
///
/// // 2026-01-16 is a Friday
/// let friday_evening = NaiveDateTime::parse_from_str("2026-01-16 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify_shift(friday_evening), ShiftClassification::Shabbat);
///
/// let friday_afternoon = NaiveDateTime::parse_from_str("2026-01-16 17:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify_shift(friday_afternoon), ShiftClassification::Regular);
/// ```
pub fn classify_shift(start: NaiveDateTime) -> ShiftClassification {
    match start.weekday() {
        Weekday::Sat => ShiftClassification::Shabbat,
        Weekday::Fri if start.hour() >= SHABBAT_EVE_START_HOUR => ShiftClassification::Shabbat,
        _ => ShiftClassification::Regular,
    }
}

/// The result of classifying a shift, including the audit step.
#[derive(Debug, Clone)]
pub struct ShabbatClassificationResult {
    /// The classification of the whole shift.
    pub classification: ShiftClassification,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

/// Classifies a shift and records the decision.
pub fn detect_shabbat(start: NaiveDateTime, step_number: u32) -> ShabbatClassificationResult {
    let classification = classify_shift(start);
    let weekday = start.weekday();

    let reasoning = match (classification, weekday) {
        (ShiftClassification::Shabbat, Weekday::Sat) => {
            "Shift starts on Saturday, all hours paid at the Shabbat rate".to_string()
        }
        (ShiftClassification::Shabbat, _) => format!(
            "Shift starts Friday at {}, at or after {}:00, all hours paid at the Shabbat rate",
            start.format("%H:%M"),
            SHABBAT_EVE_START_HOUR
        ),
        (ShiftClassification::Regular, Weekday::Fri) => format!(
            "Shift starts Friday at {}, before {}:00, regular rules apply",
            start.format("%H:%M"),
            SHABBAT_EVE_START_HOUR
        ),
        (ShiftClassification::Regular, _) => {
            format!("Shift starts on {:?}, regular rules apply", weekday)
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "shabbat_classification".to_string(),
        rule_name: "Shabbat Classification".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "weekday": format!("{:?}", weekday),
            "hour": start.hour()
        }),
        output: serde_json::json!({
            "classification": classification.to_string().to_lowercase(),
            "is_shabbat": classification == ShiftClassification::Shabbat
        }),
        reasoning,
    };

    ShabbatClassificationResult {
        classification,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    // ==========================================================================
    // SB-001: Friday before 18:00 is regular
    // ==========================================================================
    #[test]
    fn test_sb_001_friday_afternoon_is_regular() {
        // 2026-01-16 is a Friday
        let start = make_datetime("2026-01-16", "16:00:00");
        assert_eq!(classify_shift(start), ShiftClassification::Regular);
    }

    // ==========================================================================
    // SB-002: Friday at exactly 18:00 is Shabbat
    // ==========================================================================
    #[test]
    fn test_sb_002_friday_1800_is_shabbat() {
        let start = make_datetime("2026-01-16", "18:00:00");
        assert_eq!(classify_shift(start), ShiftClassification::Shabbat);
    }

    // ==========================================================================
    // SB-003: Friday 17:59 is regular
    // ==========================================================================
    #[test]
    fn test_sb_003_friday_1759_is_regular() {
        let start = make_datetime("2026-01-16", "17:59:00");
        assert_eq!(classify_shift(start), ShiftClassification::Regular);
    }

    // ==========================================================================
    // SB-004: Saturday at any hour is Shabbat
    // ==========================================================================
    #[test]
    fn test_sb_004_saturday_any_hour_is_shabbat() {
        // 2026-01-17 is a Saturday
        for time in ["00:00:00", "10:00:00", "20:00:00", "23:59:00"] {
            let start = make_datetime("2026-01-17", time);
            assert_eq!(
                classify_shift(start),
                ShiftClassification::Shabbat,
                "Saturday {} should be Shabbat",
                time
            );
        }
    }

    // ==========================================================================
    // SB-005: Sunday through Thursday are regular, even in the evening
    // ==========================================================================
    #[test]
    fn test_sb_005_sunday_to_thursday_are_regular() {
        for date in ["2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14", "2026-01-15"] {
            let start = make_datetime(date, "19:00:00");
            assert_eq!(classify_shift(start), ShiftClassification::Regular);
        }
    }

    #[test]
    fn test_audit_step_for_saturday() {
        let result = detect_shabbat(make_datetime("2026-01-17", "10:00:00"), 2);

        assert_eq!(result.classification, ShiftClassification::Shabbat);
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "shabbat_classification");
        assert_eq!(result.audit_step.input["weekday"], "Sat");
        assert_eq!(result.audit_step.output["classification"], "shabbat");
        assert_eq!(result.audit_step.output["is_shabbat"], true);
        assert!(result.audit_step.reasoning.contains("Saturday"));
    }

    #[test]
    fn test_audit_step_for_friday_afternoon() {
        let result = detect_shabbat(make_datetime("2026-01-16", "16:00:00"), 2);

        assert_eq!(result.classification, ShiftClassification::Regular);
        assert_eq!(result.audit_step.output["is_shabbat"], false);
        assert!(result.audit_step.reasoning.contains("before 18:00"));
    }

    #[test]
    fn test_classification_serialization() {
        let json = serde_json::to_string(&ShiftClassification::Shabbat).unwrap();
        assert_eq!(json, "\"shabbat\"");

        let deserialized: ShiftClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ShiftClassification::Shabbat);
    }
}
