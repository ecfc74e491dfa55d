//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine settings
//! and the job store from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Job, JobStore};

use super::types::{EngineConfig, EngineMetadata, TransportPolicy};

/// Loads and provides access to engine configuration and the job store.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Engine metadata and transport policy
/// └── jobs.yaml     # Configured jobs and the active job
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let job = loader.active_job().unwrap();
/// println!("Active job: {} at {} per hour", job.name, job.base_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    jobs: JobStore,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any configured job fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        let jobs = Self::load_yaml::<JobStore>(&path.join("jobs.yaml"))?;

        let loader = Self::from_parts(engine, jobs)?;
        debug!(
            path = %path.display(),
            jobs = loader.jobs.jobs.len(),
            "Loaded configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from already-parsed parts, validating every job.
    pub fn from_parts(engine: EngineConfig, jobs: JobStore) -> EngineResult<Self> {
        for job in &jobs.jobs {
            job.validate()?;
        }

        if let Some(active) = &jobs.active_job {
            jobs.get(active)?;
        }

        Ok(Self { engine, jobs })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.engine.engine
    }

    /// Returns the statutory transport parameters.
    pub fn transport_policy(&self) -> &TransportPolicy {
        &self.engine.transport
    }

    /// Returns the job store.
    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    /// Gets a job by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_earnings::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let job = loader.get_job("cafe")?;
    /// println!("Job: {}", job.name);
    /// # Ok::<(), shift_earnings::error::EngineError>(())
    /// ```
    pub fn get_job(&self, id: &str) -> EngineResult<&Job> {
        self.jobs.get(id)
    }

    /// Returns the job new shifts are logged against.
    pub fn active_job(&self) -> EngineResult<&Job> {
        self.jobs.active()
    }
}
