//! HTTP API module for the Shift Earnings Engine.
//!
//! This module provides REST endpoints for calculating single shifts,
//! summarizing a pay period, and listing the configured jobs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SummaryRequest, SummaryShiftRequest};
pub use response::{ApiError, SummaryResponse};
pub use state::AppState;
