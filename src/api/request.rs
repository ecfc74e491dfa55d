//! Request types for the Shift Earnings API.
//!
//! Shift times and dates arrive as plain strings exactly as a worker types
//! them; they are parsed into domain types by the handlers so that bad input
//! is reported with the engine's own error codes.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Job, PayPeriod, ShiftInput};

/// Request body for the `/calculate` endpoint.
///
/// The job is resolved in this order: the inline `job`, then `job_id` from the
/// job store, then the store's active job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar day the shift starts on (`YYYY-MM-DD`).
    pub date: String,
    /// Local start time (`HH:MM`).
    pub start_time: String,
    /// Local end time (`HH:MM`); earlier than `start_time` for overnight shifts.
    pub end_time: String,
    /// Id of a configured job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// An inline job configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl CalculationRequest {
    /// Parses the shift fields.
    pub fn shift(&self) -> EngineResult<ShiftInput> {
        ShiftInput::parse(&self.start_time, &self.end_time, &self.date)
    }
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The period to summarize.
    pub period: PayPeriod,
    /// The shifts worked, each calculated against the job store.
    pub shifts: Vec<SummaryShiftRequest>,
}

/// A shift in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryShiftRequest {
    /// The calendar day the shift starts on (`YYYY-MM-DD`).
    pub date: String,
    /// Local start time (`HH:MM`).
    pub start_time: String,
    /// Local end time (`HH:MM`).
    pub end_time: String,
    /// Id of a configured job; the active job when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl SummaryShiftRequest {
    /// Parses the shift fields.
    pub fn shift(&self) -> EngineResult<ShiftInput> {
        ShiftInput::parse(&self.start_time, &self.end_time, &self.date)
    }
}
