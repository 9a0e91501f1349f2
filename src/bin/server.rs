// Employee HAL - API Server
// Run with: cargo run --bin server

//! # Employee HAL Server Binary
//!
//! Starts the HTTP server for the `/employees` resource.
//!
//! ## What This Server Provides
//!
//! - **REST API**: list, create, fetch and replace employees
//! - **HAL JSON**: every employee carries `self` and `employees` links
//! - **Seed Data**: Frodo and Bilbo are preloaded unless `--no-seed` is given
//! - **In-Memory Storage**: no database needed
//!
//! ## Startup Sequence
//! ```text
//! .env → Args (clap) → tracing → Settings (defaults, file, env, flags)
//!   ↓
//! EmployeeApiServerBuilder → seed → axum server
//! ```

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_hal::{Args, EmployeeApiServerBuilder, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file; it's optional
    if let Err(e) = dotenv() {
        eprintln!("Warning: Could not load .env file: {}", e);
    }

    let args = Args::parse();

    // RUST_LOG wins; otherwise --verbose picks debug over info
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚀 Starting Employee HAL Server...");
    info!("=====================================");

    let settings = Settings::load(&args)?;
    info!("Config file: {}", args.config.display());
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    EmployeeApiServerBuilder::new()
        .with_config(settings.api_config())
        .build()
        .run()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
