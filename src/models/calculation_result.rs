//! Calculation result models for the Shift Earnings Engine.
//!
//! This module contains the [`ShiftCalculation`] type and the structures it is
//! made of: breakdown lines for display and audit steps that record every rule
//! decision taken while calculating a shift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pay component a breakdown line describes.
///
/// Variants are declared in breakdown order.
///
/// # Example
///
/// ```
/// use shift_earnings::models::PayCategory;
///
/// assert!(PayCategory::Regular < PayCategory::Transport);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Hours up to the overtime threshold at the base rate.
    Regular,
    /// Hours beyond the overtime threshold at the overtime rate.
    Overtime,
    /// All hours of a Shabbat shift at the Shabbat rate.
    Shabbat,
    /// Percentage bonus on the base rate for hours in the night window.
    NightBonus,
    /// Per-shift transport reimbursement.
    Transport,
}

/// A single human-readable line of a shift's pay breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The pay component this line describes.
    pub category: PayCategory,
    /// Hours counted for the component; absent for transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// The amount earned for the component.
    pub amount: Decimal,
    /// Display text, hours to one decimal place and money to two.
    pub description: String,
}

impl BreakdownLine {
    /// Line for regular hours.
    pub fn regular(hours: Decimal, amount: Decimal) -> Self {
        Self::hourly(PayCategory::Regular, hours, amount, "שעות רגילות".to_string())
    }

    /// Line for overtime hours.
    pub fn overtime(hours: Decimal, amount: Decimal) -> Self {
        Self::hourly(PayCategory::Overtime, hours, amount, "שעות נוספות".to_string())
    }

    /// Line for Shabbat hours.
    pub fn shabbat(hours: Decimal, amount: Decimal) -> Self {
        Self::hourly(PayCategory::Shabbat, hours, amount, "שעות שבת".to_string())
    }

    /// Line for the night bonus, labelled with the bonus percentage.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::models::BreakdownLine;
    /// use rust_decimal::Decimal;
    ///
    /// let line = BreakdownLine::night_bonus(Decimal::new(8, 0), Decimal::new(70, 0), Decimal::new(25, 0));
    /// assert_eq!(line.description, "8.0 שעות לילה (+25%): ₪70.00");
    /// ```
    pub fn night_bonus(hours: Decimal, amount: Decimal, bonus_percent: Decimal) -> Self {
        let label = format!("שעות לילה (+{}%)", bonus_percent.normalize());
        Self::hourly(PayCategory::NightBonus, hours, amount, label)
    }

    /// Line for the transport reimbursement.
    pub fn transport(amount: Decimal) -> Self {
        Self {
            category: PayCategory::Transport,
            hours: None,
            amount,
            description: format!("נסיעה: ₪{}", format_money(amount)),
        }
    }

    fn hourly(category: PayCategory, hours: Decimal, amount: Decimal, label: String) -> Self {
        Self {
            category,
            hours: Some(hours),
            amount,
            description: format!(
                "{} {}: ₪{}",
                format_hours(hours),
                label,
                format_money(amount)
            ),
        }
    }
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

fn format_hours(hours: Decimal) -> String {
    format!(
        "{:.1}",
        hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// A single step in the audit trail recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete earnings calculation for one shift.
///
/// Hour buckets are not exclusive: night hours are counted a second time on
/// top of the regular or overtime hours they fall in. Stored amounts are
/// exact; rounding happens only in breakdown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalculation {
    /// Elapsed wall-clock hours of the shift.
    pub total_hours: Decimal,
    /// Whether the whole shift was classified as Shabbat.
    pub is_shabbat: bool,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Hours paid at the Shabbat rate.
    pub shabbat_hours: Decimal,
    /// Hours inside the night window that earn the night bonus.
    pub night_hours: Decimal,
    /// Transport reimbursement for the shift.
    pub transport_cost: Decimal,
    /// `base_hours * base_rate`.
    pub base_earnings: Decimal,
    /// `overtime_hours * overtime_rate`.
    pub overtime_earnings: Decimal,
    /// `shabbat_hours * shabbat_rate`.
    pub shabbat_earnings: Decimal,
    /// `night_hours * base_rate * night_shift_bonus / 100`.
    pub night_bonus: Decimal,
    /// Sum of the four earning components and transport.
    pub total_earnings: Decimal,
    /// One line per non-zero component, in [`PayCategory`] order.
    pub breakdown: Vec<BreakdownLine>,
    /// Every rule decision, in the order it was taken.
    pub audit_steps: Vec<AuditStep>,
}

impl ShiftCalculation {
    /// Sum of the earning components without transport.
    pub fn earnings_before_transport(&self) -> Decimal {
        self.base_earnings + self.overtime_earnings + self.shabbat_earnings + self.night_bonus
    }
}
