//! Application configuration management.
//!
//! Settings are merged from several sources, later ones overriding earlier ones:
//!
//! 1. **Built-in defaults** - `0.0.0.0:8080`, CORS on, seeding on
//! 2. **Config file** - TOML/YAML/JSON, `employees.toml` by default; a missing
//!    file is not an error
//! 3. **Environment variables** - prefixed with `EMPLOYEES_`, with `__`
//!    separating nested keys
//! 4. **Command-line flags** - `--host`, `--port`, `--external-url`, `--no-seed`
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Override server port
//! EMPLOYEES_SERVER__PORT=9000
//!
//! # Root every generated link at a public URL
//! EMPLOYEES_LINKS__EXTERNAL_URL=https://api.example.com
//!
//! # Start with an empty store
//! EMPLOYEES_SEED__ENABLED=false
//! ```

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::api::EmployeeApiConfig;
use crate::Result;

/// Command-line arguments for the server binary
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-hal-server")]
#[command(about = "Hypermedia-driven REST API for employee records")]
#[command(version)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short = 'f', long, env = "EMPLOYEES_CONFIG", default_value = "employees.toml")]
    pub config: PathBuf,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Public root URL used when generating links
    #[arg(long)]
    pub external_url: Option<String>,

    /// Start without the demo employees
    #[arg(long)]
    pub no_seed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkSettings {
    /// Public root for links; when unset, links follow the request's Host header
    #[serde(default)]
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedSettings {
    pub enabled: bool,
}

/// Fully merged configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub links: LinkSettings,
    pub seed: SeedSettings,
}

impl Settings {
    /// Load settings from defaults, the config file, the environment and `args`
    pub fn load(args: &Args) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.cors_enabled", true)?
            .set_default("seed.enabled", true)?
            .add_source(File::from(args.config.as_path()).required(false))
            .add_source(
                Environment::with_prefix("EMPLOYEES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(host) = &args.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = args.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = &args.external_url {
            builder = builder.set_override("links.external_url", url.as_str())?;
        }
        if args.no_seed {
            builder = builder.set_override("seed.enabled", false)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn api_config(&self) -> EmployeeApiConfig {
        EmployeeApiConfig::from(self)
    }
}

impl From<&Settings> for EmployeeApiConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            port: settings.server.port,
            host: settings.server.host.clone(),
            cors_enabled: settings.server.cors_enabled,
            external_url: settings.links.external_url.clone(),
            seed_data: settings.seed.enabled,
        }
    }
}
