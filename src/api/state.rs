//! Application state for the Shift Earnings API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::Job;

/// Shared application state.
///
/// Holds the loaded configuration behind an `Arc`; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Looks up `job_id`, or the active job when no id is given.
    pub fn resolve_job(&self, job_id: Option<&str>) -> EngineResult<&Job> {
        match job_id {
            Some(id) => self.config.get_job(id),
            None => self.config.active_job(),
        }
    }
}
