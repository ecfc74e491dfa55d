//! Calculation logic for the Shift Earnings Engine.
//!
//! This module contains the rules that turn a worked shift and a job's rates
//! into earnings: interval resolution across midnight, Shabbat
//! classification, the overtime split, the night window overlap, the
//! transport allowance, and aggregation over a pay period.

mod earnings;
mod income_summary;
mod night_shift;
mod overtime;
mod shabbat;
mod shift_interval;
mod transport;

pub use earnings::{calculate, calculate_shift_earnings, record_shift};
pub use income_summary::summarize_income;
pub use night_shift::{
    NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR, NightHoursResult, calculate_night_hours,
    night_window,
};
pub use overtime::{DEFAULT_OVERTIME_THRESHOLD, OvertimeSplit, split_overtime};
pub use shabbat::{
    SHABBAT_EVE_START_HOUR, ShabbatClassificationResult, ShiftClassification, classify_shift,
    detect_shabbat,
};
pub use shift_interval::{ShiftInterval, ShiftIntervalResult, resolve_interval};
pub use transport::{TransportMode, TransportResult, calculate_transport, statutory_daily_allowance};
