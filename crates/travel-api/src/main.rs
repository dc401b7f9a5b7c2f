//! Travel API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p travel-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use tracing::{error, info};
use travel_common::{try_init_tracing_with_config, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Tracing format depends on the environment, so configuration comes first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Travel API Server"
    );

    if let Err(e) = travel_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
