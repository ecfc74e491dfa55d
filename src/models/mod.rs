//! Core data models for the Shift Earnings Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod income_summary;
mod job;
mod pay_period;
mod shift;

pub use calculation_result::{AuditStep, BreakdownLine, PayCategory, ShiftCalculation};
pub use income_summary::IncomeSummary;
pub use job::{Job, JobStore};
pub use pay_period::PayPeriod;
pub use shift::{ShiftInput, ShiftRecord, parse_date, parse_time};
pub(crate) use shift::hours_between;
