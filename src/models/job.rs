//! Job rate configuration and the caller-owned job store.
//!
//! A [`Job`] carries every rate the calculator needs. The calculator never
//! validates or looks jobs up itself; callers keep jobs in a [`JobStore`]
//! and pass the selected one in explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Highest hourly rate or per-shift transport amount a job may carry.
pub const MAX_JOB_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Highest overtime threshold, in hours; no shift lasts longer than a day.
pub const MAX_OVERTIME_AFTER: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Highest night bonus percentage.
pub const MAX_NIGHT_SHIFT_BONUS: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

fn default_overtime_after() -> Decimal {
    Decimal::new(8, 0)
}

/// The rate configuration of a job.
///
/// # Example
///
/// ```
/// use shift_earnings::models::Job;
/// use rust_decimal::Decimal;
///
/// let job = Job {
///     id: "cafe".to_string(),
///     name: "Cafe".to_string(),
///     ..Job::default()
/// };
/// assert_eq!(job.base_rate, Decimal::new(35, 0));
/// assert!(job.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier of the job.
    #[serde(default)]
    pub id: String,
    /// Display name of the job.
    pub name: String,
    /// Free-form workplace location.
    #[serde(default)]
    pub location: String,
    /// Hourly rate for regular hours.
    pub base_rate: Decimal,
    /// Hourly rate for hours beyond `overtime_after`.
    pub overtime_rate: Decimal,
    /// Hourly rate for a shift classified as Shabbat.
    pub shabbat_rate: Decimal,
    /// Flat per-shift transport cost, used when `auto_transport` is off.
    #[serde(default)]
    pub transport_cost: Decimal,
    /// Use the statutory daily transport allowance instead of `transport_cost`.
    #[serde(default)]
    pub auto_transport: bool,
    /// Hours after which a regular shift is paid at the overtime rate.
    #[serde(default = "default_overtime_after")]
    pub overtime_after: Decimal,
    /// Night bonus as a percentage of the base rate.
    #[serde(default)]
    pub night_shift_bonus: Decimal,
}

impl Default for Job {
    /// A new job with the defaults offered when a job is first created.
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            location: String::new(),
            base_rate: Decimal::new(35, 0),
            overtime_rate: Decimal::new(525, 1),
            shabbat_rate: Decimal::new(70, 0),
            transport_cost: Decimal::new(30, 0),
            auto_transport: true,
            overtime_after: default_overtime_after(),
            night_shift_bonus: Decimal::new(25, 0),
        }
    }
}

impl Job {
    /// Validates the job's configuration values.
    ///
    /// The calculator accepts any values; this check is for callers that
    /// accept job configuration from users or files.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidJob`] naming the first offending field.
    /// Upper bounds keep every earnings product of a validated job within
    /// `Decimal` range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_job("name", "must not be empty"));
        }
        if self.base_rate <= Decimal::ZERO {
            return Err(invalid_job("base_rate", "must be greater than zero"));
        }

        let bounded = [
            ("base_rate", self.base_rate, MAX_JOB_AMOUNT),
            ("overtime_rate", self.overtime_rate, MAX_JOB_AMOUNT),
            ("shabbat_rate", self.shabbat_rate, MAX_JOB_AMOUNT),
            ("transport_cost", self.transport_cost, MAX_JOB_AMOUNT),
            ("overtime_after", self.overtime_after, MAX_OVERTIME_AFTER),
            ("night_shift_bonus", self.night_shift_bonus, MAX_NIGHT_SHIFT_BONUS),
        ];
        for (field, value, max) in bounded {
            if value < Decimal::ZERO {
                return Err(invalid_job(field, "must not be negative"));
            }
            if value > max {
                return Err(invalid_job(
                    field,
                    &format!("must not exceed {}", max.normalize()),
                ));
            }
        }

        Ok(())
    }
}

fn invalid_job(field: &str, message: &str) -> EngineError {
    EngineError::InvalidJob {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// The set of jobs a user works, plus the currently selected one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStore {
    /// The id of the job new shifts are logged against.
    #[serde(default)]
    pub active_job: Option<String>,
    /// All configured jobs.
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl JobStore {
    /// Looks a job up by id.
    pub fn get(&self, id: &str) -> EngineResult<&Job> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or_else(|| EngineError::JobNotFound { id: id.to_string() })
    }

    /// Returns the active job.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoActiveJob`] when nothing is selected, or
    /// [`EngineError::JobNotFound`] when the selection points at a missing job.
    pub fn active(&self) -> EngineResult<&Job> {
        let id = self.active_job.as_deref().ok_or(EngineError::NoActiveJob)?;
        self.get(id)
    }

    /// Adds a job after validating it and returns its id.
    ///
    /// A job without an id is assigned a fresh UUID. The first job added to
    /// an empty store becomes the active job.
    pub fn insert(&mut self, mut job: Job) -> EngineResult<String> {
        job.validate()?;

        if job.id.is_empty() {
            job.id = Uuid::new_v4().to_string();
        } else if self.jobs.iter().any(|existing| existing.id == job.id) {
            return Err(invalid_job("id", "a job with this id already exists"));
        }

        let id = job.id.clone();
        if self.jobs.is_empty() {
            self.active_job = Some(id.clone());
        }
        self.jobs.push(job);
        Ok(id)
    }

    /// Replaces the job with the same id.
    pub fn update(&mut self, job: Job) -> EngineResult<()> {
        job.validate()?;

        let slot = self
            .jobs
            .iter_mut()
            .find(|existing| existing.id == job.id)
            .ok_or_else(|| EngineError::JobNotFound { id: job.id.clone() })?;
        *slot = job;
        Ok(())
    }

    /// Removes a job and returns it.
    ///
    /// Removing the active job selects the first remaining job, or clears the
    /// selection when none remain.
    pub fn remove(&mut self, id: &str) -> EngineResult<Job> {
        let index = self
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| EngineError::JobNotFound { id: id.to_string() })?;
        let removed = self.jobs.remove(index);

        if self.active_job.as_deref() == Some(id) {
            self.active_job = self.jobs.first().map(|job| job.id.clone());
        }

        Ok(removed)
    }

    /// Makes the given job the active one.
    pub fn select(&mut self, id: &str) -> EngineResult<()> {
        self.get(id)?;
        self.active_job = Some(id.to_string());
        Ok(())
    }
}
