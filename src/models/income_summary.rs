//! Income summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Aggregated earnings of the shifts worked within a [`PayPeriod`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSummary {
    /// The period the summary covers.
    pub period: PayPeriod,
    /// Number of shifts dated inside the period.
    pub shifts_worked: u32,
    /// Total elapsed hours of those shifts.
    pub hours_worked: Decimal,
    /// Total regular-hour earnings.
    pub base_earnings: Decimal,
    /// Total overtime earnings.
    pub overtime_earnings: Decimal,
    /// Total Shabbat earnings.
    pub shabbat_earnings: Decimal,
    /// Total night bonus.
    pub night_bonus: Decimal,
    /// Total transport reimbursement.
    pub transport_total: Decimal,
    /// Total earnings including transport.
    pub total_earnings: Decimal,
}

impl IncomeSummary {
    /// An empty summary for the given period.
    pub fn empty(period: PayPeriod) -> Self {
        Self {
            period,
            shifts_worked: 0,
            hours_worked: Decimal::ZERO,
            base_earnings: Decimal::ZERO,
            overtime_earnings: Decimal::ZERO,
            shabbat_earnings: Decimal::ZERO,
            night_bonus: Decimal::ZERO,
            transport_total: Decimal::ZERO,
            total_earnings: Decimal::ZERO,
        }
    }
}
