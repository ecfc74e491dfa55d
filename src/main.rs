//! HTTP server for the Shift Earnings Engine.
//!
//! Settings come from the environment:
//! - `SHIFT_EARNINGS_CONFIG`: configuration directory (default `./config/default`)
//! - `SHIFT_EARNINGS_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `shift_earnings=info`)

use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_earnings::api::{AppState, create_router};
use shift_earnings::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shift_earnings=info")),
        )
        .init();

    let config_dir =
        std::env::var("SHIFT_EARNINGS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("SHIFT_EARNINGS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        engine = %config.engine().name,
        version = %config.engine().version,
        jobs = config.jobs().jobs.len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Shift earnings server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
