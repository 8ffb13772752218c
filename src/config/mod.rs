//! Application configuration module
//!
//! Configuration is read from environment variables with the `config` and
//! `dotenvy` crates. Variables use the `FLEET_CONSOLE` prefix and `__` to
//! separate nested values. Every value has a default, so an empty
//! environment yields a runnable development configuration.
//!
//! # Example
//!
//! ```no_run
//! use fleet_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod access;
mod error;
mod features;
mod server;

pub use access::AccessConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Access policy (trial plan key)
    #[serde(default)]
    pub access: AccessConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `FLEET_CONSOLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FLEET_CONSOLE__ACCESS__TRIAL_PLAN_KEY=free-trial` -> `access.trial_plan_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FLEET_CONSOLE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.access.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
