//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GADGET_SKILL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gadget_skill::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod discovery;
mod error;
mod server;
mod skill;
mod speech;

pub use discovery::DiscoveryConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use skill::SkillConfig;
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the skill starts with no environment at all.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, skill path)
    #[serde(default)]
    pub server: ServerConfig,

    /// Skill identity and gadget namespace
    #[serde(default)]
    pub skill: SkillConfig,

    /// Endpoint discovery
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Speech text
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GADGET_SKILL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GADGET_SKILL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GADGET_SKILL__SKILL__APPLICATION_ID=...` -> `skill.application_id = ...`
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
                    .prefix("GADGET_SKILL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.skill.validate()?;
        self.discovery.validate(&self.server.environment)?;
        self.speech.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("GADGET_SKILL__SERVER__PORT");
        env::remove_var("GADGET_SKILL__SERVER__ENVIRONMENT");
        env::remove_var("GADGET_SKILL__SKILL__APPLICATION_ID");
        env::remove_var("GADGET_SKILL__SKILL__LOG_PAYLOADS");
        env::remove_var("GADGET_SKILL__DISCOVERY__TIMEOUT_SECS");
        env::remove_var("GADGET_SKILL__SPEECH__FAREWELL");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.skill.gadget_namespace, "Custom.ShellRunnerGadget");
        assert_eq!(config.discovery.timeout_secs, 5);
        assert_eq!(config.speech.farewell, "Deu!");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GADGET_SKILL__SERVER__PORT", "3000");
        env::set_var("GADGET_SKILL__SKILL__APPLICATION_ID", "amzn1.ask.skill.test");
        env::set_var("GADGET_SKILL__SKILL__LOG_PAYLOADS", "false");
        env::set_var("GADGET_SKILL__DISCOVERY__TIMEOUT_SECS", "2");
        env::set_var("GADGET_SKILL__SPEECH__FAREWELL", "Adiós");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.skill.application_id.as_deref(), Some("amzn1.ask.skill.test"));
        assert!(!config.skill.log_payloads);
        assert_eq!(config.discovery.timeout_secs, 2);
        assert_eq!(config.speech.farewell, "Adiós");
        assert_eq!(config.speech.launch, "Vamos al lío");
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GADGET_SKILL__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_invalid_section() {
        let mut config = AppConfig::default();
        config.discovery.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDiscoveryTimeout)
        ));
    }
}
