//! Configuration types for the Shift Earnings Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory reference minimum wage used for the transport allowance (2024).
pub const REFERENCE_MINIMUM_WAGE: Decimal = Decimal::from_parts(5300, 0, 0, false, 0);

/// Share of the minimum wage that funds monthly transport (7.5%).
pub const TRANSPORT_WAGE_SHARE: Decimal = Decimal::from_parts(75, 0, 0, false, 3);

/// Working days the monthly transport share is spread over.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Floor for the daily transport allowance.
pub const MINIMUM_DAILY_TRANSPORT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Metadata about the engine deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the deployment.
    pub name: String,
    /// The version or effective date of the rate rules.
    pub version: String,
}

/// Parameters of the statutory daily transport allowance.
///
/// The allowance is `max(minimum_daily, minimum_wage * wage_share / working_days_per_month)`.
///
/// # Example
///
/// ```
/// use shift_earnings::config::TransportPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = TransportPolicy::default();
/// assert_eq!(policy.minimum_wage, Decimal::new(5300, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportPolicy {
    /// Monthly minimum wage the allowance is derived from.
    pub minimum_wage: Decimal,
    /// Share of the minimum wage reimbursed for transport each month.
    pub wage_share: Decimal,
    /// Working days per month the share is divided by.
    pub working_days_per_month: Decimal,
    /// Lowest daily allowance paid.
    pub minimum_daily: Decimal,
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self {
            minimum_wage: REFERENCE_MINIMUM_WAGE,
            wage_share: TRANSPORT_WAGE_SHARE,
            working_days_per_month: WORKING_DAYS_PER_MONTH,
            minimum_daily: MINIMUM_DAILY_TRANSPORT,
        }
    }
}

/// Engine configuration from engine.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deployment metadata.
    pub engine: EngineMetadata,
    /// Statutory transport parameters; statutory defaults when omitted.
    #[serde(default)]
    pub transport: TransportPolicy,
}
