//! Configuration loading and management for the Shift Earnings Engine.
//!
//! This module loads the engine settings and the job store from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineMetadata, MINIMUM_DAILY_TRANSPORT, REFERENCE_MINIMUM_WAGE,
    TRANSPORT_WAGE_SHARE, TransportPolicy, WORKING_DAYS_PER_MONTH,
};
