//! Thesis API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p thesis-api
//! ```
//!
//! Configuration is loaded from environment variables (a .env file is
//! honored in development).

use thesis_common::{try_init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing per environment
    let tracing_config = match config.app.env {
        Environment::Production => TracingConfig::production(),
        _ => TracingConfig::development(),
    };
    if let Err(e) = try_init_tracing(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    thesis_api::run(config).await?;

    Ok(())
}
